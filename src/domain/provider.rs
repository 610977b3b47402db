//! Model providers and search backends

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language model provider used by the planner and writer stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Anthropic,
    #[default]
    OpenAi,
    Groq,
}

impl ModelProvider {
    pub const ALL: [ModelProvider; 3] =
        [ModelProvider::Anthropic, ModelProvider::OpenAi, ModelProvider::Groq];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::Anthropic => "anthropic",
            ModelProvider::OpenAi => "openai",
            ModelProvider::Groq => "groq",
        }
    }

    /// Look up a provider by its exact declared value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search / retrieval backend queried during research iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchApi {
    Perplexity,
    #[default]
    Tavily,
    Exa,
    Arxiv,
    Pubmed,
    Linkup,
}

impl SearchApi {
    pub const ALL: [SearchApi; 6] = [
        SearchApi::Perplexity,
        SearchApi::Tavily,
        SearchApi::Exa,
        SearchApi::Arxiv,
        SearchApi::Pubmed,
        SearchApi::Linkup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchApi::Perplexity => "perplexity",
            SearchApi::Tavily => "tavily",
            SearchApi::Exa => "exa",
            SearchApi::Arxiv => "arxiv",
            SearchApi::Pubmed => "pubmed",
            SearchApi::Linkup => "linkup",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|api| api.as_str() == value)
    }
}

impl fmt::Display for SearchApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
