//! External config file loading

use crate::error::{ConfigError, Result};
use figment::providers::{Format, Json, Toml, Yaml};
use figment::Figment;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const DISCOVERY_CANDIDATES: &[&str] = &[
    "research-config.toml",
    ".research-config.toml",
    "research-config.yaml",
    "research-config.yml",
    "research-config.json",
];

/// Load an external configuration (the value handed to the resolver) from a
/// TOML, YAML or JSON file. The format follows the file extension.
pub fn load_external_config(path: &Path) -> Result<Value> {
    let load_err = |message: String| ConfigError::Load { path: path.to_path_buf(), message };

    let content = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "toml" => Figment::from(Toml::string(&content)),
        "yaml" | "yml" => Figment::from(Yaml::string(&content)),
        "json" => Figment::from(Json::string(&content)),
        other => return Err(load_err(format!("unsupported config extension '.{other}'"))),
    };

    figment.extract::<Value>().map_err(|e| load_err(e.to_string()))
}

/// Find an external config file in `dir`, in a fixed search order.
pub fn discover_external_config(dir: &Path) -> Option<PathBuf> {
    DISCOVERY_CANDIDATES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Load an explicitly given file, or fall back to discovery in `dir`.
///
/// Explicit paths must load. An auto-discovered file that fails to parse is
/// skipped with a warning so the pipeline still runs on defaults.
pub fn load_or_discover(dir: &Path, explicit: Option<&Path>) -> Result<Option<Value>> {
    if let Some(path) = explicit {
        return load_external_config(path).map(Some);
    }

    let Some(discovered) = discover_external_config(dir) else {
        return Ok(None);
    };

    match load_external_config(&discovered) {
        Ok(value) => {
            tracing::debug!("loaded external config {}", discovered.display());
            Ok(Some(value))
        }
        Err(e) => {
            tracing::warn!("Failed to load auto-discovered config {}: {}", discovered.display(), e);
            Ok(None)
        }
    }
}
