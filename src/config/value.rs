//! Candidate values and their coercion into typed fields

use super::schema::FieldSpec;
use crate::domain::{ModelProvider, Params, SearchApi};
use crate::error::{ConfigError, Result};
use serde_json::Value;

/// Where a candidate value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Environment,
    Override,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Environment => "environment",
            Origin::Override => "override",
        }
    }
}

/// A raw value proposed for a field, before it is accepted or discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Environment values always arrive as strings.
    Env(String),
    /// Override values are already typed.
    Override(Value),
}

impl Candidate {
    pub fn origin(&self) -> Origin {
        match self {
            Candidate::Env(_) => Origin::Environment,
            Candidate::Override(_) => Origin::Override,
        }
    }

    pub fn is_unset(&self, policy: MergePolicy) -> bool {
        match self {
            Candidate::Env(raw) => raw.is_empty(),
            Candidate::Override(value) => policy.is_unset(value),
        }
    }

    fn describe(&self) -> String {
        match self {
            Candidate::Env(raw) => format!("{raw:?}"),
            Candidate::Override(value) => value.to_string(),
        }
    }
}

/// Which candidate values count as "not provided".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Null, empty strings, `0`, `false` and empty collections all fall back to the default.
    #[default]
    Lenient,
    /// Only null and empty strings fall back; `0` and `false` are kept.
    Strict,
}

impl MergePolicy {
    pub fn is_unset(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (_, Value::String(s)) => s.is_empty(),
            (MergePolicy::Strict, _) => false,
            (MergePolicy::Lenient, Value::Bool(b)) => !b,
            (MergePolicy::Lenient, Value::Number(n)) => n.as_f64() == Some(0.0),
            (MergePolicy::Lenient, Value::Array(items)) => items.is_empty(),
            (MergePolicy::Lenient, Value::Object(map)) => map.is_empty(),
        }
    }
}

fn invalid(spec: &FieldSpec, candidate: &Candidate) -> ConfigError {
    ConfigError::InvalidValue {
        field: spec.name,
        expected: spec.kind.expected(),
        found: candidate.describe(),
    }
}

fn invalid_enum(spec: &FieldSpec, value: String) -> ConfigError {
    ConfigError::InvalidEnumValue { field: spec.name, value, expected: spec.kind.members() }
}

pub fn to_text(spec: &FieldSpec, candidate: &Candidate) -> Result<String> {
    match candidate {
        Candidate::Env(raw) => Ok(raw.clone()),
        Candidate::Override(Value::String(s)) => Ok(s.clone()),
        Candidate::Override(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
        Candidate::Override(_) => Err(invalid(spec, candidate)),
    }
}

pub fn to_count(spec: &FieldSpec, candidate: &Candidate) -> Result<u32> {
    let parsed = match candidate {
        Candidate::Env(raw) => raw.trim().parse::<u32>().ok(),
        Candidate::Override(Value::String(s)) => s.trim().parse::<u32>().ok(),
        Candidate::Override(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Candidate::Override(_) => None,
    };
    parsed.ok_or_else(|| invalid(spec, candidate))
}

fn enum_text(spec: &FieldSpec, candidate: &Candidate) -> Result<String> {
    match candidate {
        Candidate::Env(raw) => Ok(raw.clone()),
        Candidate::Override(Value::String(s)) => Ok(s.clone()),
        Candidate::Override(other) => Err(invalid_enum(spec, other.to_string())),
    }
}

pub fn to_provider(spec: &FieldSpec, candidate: &Candidate) -> Result<ModelProvider> {
    let raw = enum_text(spec, candidate)?;
    ModelProvider::parse(&raw).ok_or_else(|| invalid_enum(spec, raw))
}

pub fn to_search_api(spec: &FieldSpec, candidate: &Candidate) -> Result<SearchApi> {
    let raw = enum_text(spec, candidate)?;
    SearchApi::parse(&raw).ok_or_else(|| invalid_enum(spec, raw))
}

/// Map-valued fields accept a JSON object, or a string holding a JSON-encoded object.
pub fn to_params(spec: &FieldSpec, candidate: &Candidate) -> Result<Params> {
    let parsed = match candidate {
        Candidate::Env(raw) => serde_json::from_str::<Value>(raw).ok(),
        Candidate::Override(Value::String(s)) => serde_json::from_str::<Value>(s).ok(),
        Candidate::Override(value) => Some(value.clone()),
    };
    match parsed {
        Some(Value::Object(map)) => Ok(map.into_iter().collect()),
        _ => Err(invalid(spec, candidate)),
    }
}
