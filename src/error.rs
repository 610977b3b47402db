//! Error types for configuration resolution

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider or search-API field resolved to a value outside its declared members.
    #[error("invalid value '{value}' for {field}: expected one of {}", .expected.join(", "))]
    InvalidEnumValue { field: &'static str, value: String, expected: Vec<&'static str> },

    /// A resolved value could not be assigned to the field's type.
    #[error("invalid value for {field}: expected {expected}, found {found}")]
    InvalidValue { field: &'static str, expected: &'static str, found: String },

    #[error("failed to load external config {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
}

impl ConfigError {
    /// Name of the field that failed to resolve, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidEnumValue { field, .. } | ConfigError::InvalidValue { field, .. } => {
                Some(*field)
            }
            ConfigError::Load { .. } => None,
        }
    }
}
