//! Static descriptor of every configurable field
//!
//! Resolution walks this table instead of inspecting `Configuration` at runtime.
//! Each entry maps 1:1 to an environment variable named by upper-casing the field.

use crate::domain::{ModelProvider, SearchApi};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Count,
    Provider,
    SearchApi,
    Params,
}

impl FieldKind {
    /// Human-readable type description used in error messages and `fields` output.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Count => "a non-negative integer",
            FieldKind::Provider => "a model provider",
            FieldKind::SearchApi => "a search API",
            FieldKind::Params => "a JSON object",
        }
    }

    /// Declared members for enum-valued kinds.
    pub fn members(&self) -> Vec<&'static str> {
        match self {
            FieldKind::Provider => ModelProvider::ALL.iter().map(|p| p.as_str()).collect(),
            FieldKind::SearchApi => SearchApi::ALL.iter().map(|api| api.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Identity of each `Configuration` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ReportStructure,
    NumberOfQueries,
    MaxSearchDepth,
    PlannerProvider,
    PlannerModel,
    PlannerModelConfig,
    WriterProvider,
    WriterModel,
    WriterModelConfig,
    SearchApi,
    SearchApiConfig,
    Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(id: FieldId, name: &'static str, kind: FieldKind) -> Self {
        Self { id, name, kind }
    }

    pub fn env_key(&self) -> String {
        self.name.to_ascii_uppercase()
    }
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(FieldId::ReportStructure, "report_structure", FieldKind::Text),
    FieldSpec::new(FieldId::NumberOfQueries, "number_of_queries", FieldKind::Count),
    FieldSpec::new(FieldId::MaxSearchDepth, "max_search_depth", FieldKind::Count),
    FieldSpec::new(FieldId::PlannerProvider, "planner_provider", FieldKind::Provider),
    FieldSpec::new(FieldId::PlannerModel, "planner_model", FieldKind::Text),
    FieldSpec::new(FieldId::PlannerModelConfig, "planner_model_config", FieldKind::Params),
    FieldSpec::new(FieldId::WriterProvider, "writer_provider", FieldKind::Provider),
    FieldSpec::new(FieldId::WriterModel, "writer_model", FieldKind::Text),
    FieldSpec::new(FieldId::WriterModelConfig, "writer_model_config", FieldKind::Params),
    FieldSpec::new(FieldId::SearchApi, "search_api", FieldKind::SearchApi),
    FieldSpec::new(FieldId::SearchApiConfig, "search_api_config", FieldKind::Params),
    FieldSpec::new(FieldId::Language, "language", FieldKind::Text),
];

static FIELDS_BY_NAME: Lazy<HashMap<&'static str, &'static FieldSpec>> =
    Lazy::new(|| FIELDS.iter().map(|spec| (spec.name, spec)).collect());

pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS_BY_NAME.get(name).copied()
}
