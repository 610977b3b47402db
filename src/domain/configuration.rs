//! The resolved pipeline configuration

use super::provider::{ModelProvider, SearchApi};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Free-form provider parameters (`max_tokens`, `temperature`, `max_results`, ...).
pub type Params = BTreeMap<String, Value>;

pub const DEFAULT_REPORT_STRUCTURE: &str = "Use this structure to create a report on the user-provided topic:

1. Introduction (no research needed)
   - Brief overview of the topic area

2. Main Body Sections:
   - Each section should focus on a sub-topic of the user-provided topic

3. Conclusion
   - Aim for 1 structural element (either a list of table) that distills the main body sections
   - Provide a concise summary of the report";

pub const DEFAULT_NUMBER_OF_QUERIES: u32 = 2;
pub const DEFAULT_MAX_SEARCH_DEPTH: u32 = 2;
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_LANGUAGE: &str = "japanese";

pub fn default_model_params() -> Params {
    Params::from([
        ("max_tokens".to_string(), json!(8192)),
        ("temperature".to_string(), json!(0.0)),
    ])
}

pub fn default_search_api_params() -> Params {
    Params::from([
        ("max_results".to_string(), json!(5)),
        ("include_raw_content".to_string(), json!(false)),
    ])
}

/// Fully resolved configuration for one pipeline invocation.
///
/// Every field always holds a value: either one supplied by the environment or
/// the override map, or its declared default. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub(crate) report_structure: String,
    pub(crate) number_of_queries: u32,
    pub(crate) max_search_depth: u32,
    pub(crate) planner_provider: ModelProvider,
    pub(crate) planner_model: String,
    pub(crate) planner_model_config: Params,
    pub(crate) writer_provider: ModelProvider,
    pub(crate) writer_model: String,
    pub(crate) writer_model_config: Params,
    pub(crate) search_api: SearchApi,
    pub(crate) search_api_config: Params,
    pub(crate) language: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            report_structure: DEFAULT_REPORT_STRUCTURE.to_string(),
            number_of_queries: DEFAULT_NUMBER_OF_QUERIES,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
            planner_provider: ModelProvider::OpenAi,
            planner_model: DEFAULT_MODEL.to_string(),
            planner_model_config: default_model_params(),
            writer_provider: ModelProvider::OpenAi,
            writer_model: DEFAULT_MODEL.to_string(),
            writer_model_config: default_model_params(),
            search_api: SearchApi::Tavily,
            search_api_config: default_search_api_params(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Borrowed view of one model stage (planner or writer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSettings<'a> {
    pub provider: ModelProvider,
    pub model: &'a str,
    pub params: &'a Params,
}

impl Configuration {
    pub fn report_structure(&self) -> &str {
        &self.report_structure
    }

    /// Search queries generated per research iteration.
    pub fn number_of_queries(&self) -> u32 {
        self.number_of_queries
    }

    /// Maximum reflection + search iterations per section.
    pub fn max_search_depth(&self) -> u32 {
        self.max_search_depth
    }

    pub fn planner_provider(&self) -> ModelProvider {
        self.planner_provider
    }

    pub fn planner_model(&self) -> &str {
        &self.planner_model
    }

    pub fn planner_model_config(&self) -> &Params {
        &self.planner_model_config
    }

    pub fn writer_provider(&self) -> ModelProvider {
        self.writer_provider
    }

    pub fn writer_model(&self) -> &str {
        &self.writer_model
    }

    pub fn writer_model_config(&self) -> &Params {
        &self.writer_model_config
    }

    pub fn search_api(&self) -> SearchApi {
        self.search_api
    }

    pub fn search_api_config(&self) -> &Params {
        &self.search_api_config
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn planner(&self) -> ModelSettings<'_> {
        ModelSettings {
            provider: self.planner_provider,
            model: &self.planner_model,
            params: &self.planner_model_config,
        }
    }

    pub fn writer(&self) -> ModelSettings<'_> {
        ModelSettings {
            provider: self.writer_provider,
            model: &self.writer_model,
            params: &self.writer_model_config,
        }
    }
}
