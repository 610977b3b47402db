//! Core domain types for pipeline configuration

pub mod configuration;
pub mod provider;

pub use configuration::{
    default_model_params, default_search_api_params, Configuration, ModelSettings, Params,
    DEFAULT_LANGUAGE, DEFAULT_MAX_SEARCH_DEPTH, DEFAULT_MODEL, DEFAULT_NUMBER_OF_QUERIES,
    DEFAULT_REPORT_STRUCTURE,
};
pub use provider::{ModelProvider, SearchApi};
