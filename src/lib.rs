//! research-config: layered configuration for research/report pipelines
//!
//! Declares which search API, planner and writer models, query counts and
//! report layout a research pipeline runs with, and resolves them from an
//! environment source and a runtime override map (environment wins).
//!
//! ```no_run
//! use research_config::{MapEnv, Resolver};
//! use serde_json::json;
//!
//! let env = MapEnv::new().with("LANGUAGE", "english");
//! let external = json!({"configurable": {"search_api": "exa"}});
//! let config = Resolver::new(env).resolve(Some(&external))?;
//! assert_eq!(config.language(), "english");
//! # Ok::<(), research_config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use config::{resolve, EnvSource, MapEnv, MergePolicy, ProcessEnv, Resolver};
pub use domain::{Configuration, ModelProvider, ModelSettings, Params, SearchApi};
pub use error::{ConfigError, Result};
