//! Configuration resolution
//!
//! Resolves the pipeline configuration from an environment source and an
//! external configuration's `configurable` map, with precedence
//! Env > Overrides > Defaults.

pub mod loader;
pub mod resolve;
pub mod schema;
pub mod source;
pub mod value;

pub use loader::{discover_external_config, load_external_config, load_or_discover};
pub use resolve::{configurable, resolve, Resolver, CONFIGURABLE_KEY};
pub use schema::{field, FieldId, FieldKind, FieldSpec, FIELDS};
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use value::{Candidate, MergePolicy, Origin};
