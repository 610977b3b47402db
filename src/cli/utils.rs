//! Shared CLI utilities.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value).context("Failed rendering TOML")?,
    };
    Ok(rendered)
}

/// Parse a `FIELD=VALUE` assignment. The value is read as JSON when it parses,
/// otherwise it is kept as a plain string (`language=english`).
pub fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid assignment '{}': expected FIELD=VALUE", raw);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid assignment '{}': missing field name", raw);
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// One-line preview of a default value; multi-line text shows its first line.
pub fn preview(value: &Value) -> String {
    match value {
        Value::String(s) => match s.split_once('\n') {
            Some((first, _)) => format!("{first} ..."),
            None => s.clone(),
        },
        other => other.to_string(),
    }
}
