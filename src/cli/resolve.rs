//! Resolve command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;

use super::utils::{parse_assignment, render, OutputFormat};
use crate::config::{field, load_or_discover, MergePolicy, Resolver, CONFIGURABLE_KEY};

#[derive(Args)]
pub struct ResolveArgs {
    /// External config file (TOML, YAML or JSON) with a `configurable` table
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a field, e.g. `--set search_api=exa` (repeatable)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Keep zero and false overrides instead of falling back to defaults
    #[arg(long)]
    pub strict: bool,

    /// Prefix applied to every environment variable name
    #[arg(long, value_name = "PREFIX")]
    pub env_prefix: Option<String>,

    /// Do not look for research-config.{toml,yaml,yml,json} in the current directory
    #[arg(long)]
    pub no_discover: bool,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let mut external = if args.no_discover && args.config.is_none() {
        None
    } else {
        let cwd = std::env::current_dir().context("Failed reading current directory")?;
        load_or_discover(&cwd, args.config.as_deref())?
    };

    if !args.set.is_empty() {
        let root = external.get_or_insert_with(|| Value::Object(Map::new()));
        apply_assignments(root, &args.set)?;
    }

    let policy = if args.strict { MergePolicy::Strict } else { MergePolicy::Lenient };
    let mut resolver = Resolver::from_process_env().with_policy(policy);
    if let Some(prefix) = args.env_prefix {
        resolver = resolver.with_env_prefix(prefix);
    }

    let config = resolver.resolve(external.as_ref())?;
    println!("{}", render(&config, args.format)?.trim_end());
    Ok(())
}

/// Layer `FIELD=VALUE` assignments over the external config's `configurable` map.
fn apply_assignments(external: &mut Value, assignments: &[String]) -> Result<()> {
    if !external.is_object() {
        *external = Value::Object(Map::new());
    }
    let Some(root) = external.as_object_mut() else {
        bail!("External config is not a mapping");
    };

    let nested = root.entry(CONFIGURABLE_KEY).or_insert_with(|| Value::Object(Map::new()));
    if !nested.is_object() {
        *nested = Value::Object(Map::new());
    }
    let Some(overrides) = nested.as_object_mut() else {
        bail!("'{}' is not a mapping", CONFIGURABLE_KEY);
    };

    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        if field(&key).is_none() {
            bail!("Unknown configuration field '{}'", key);
        }
        overrides.insert(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignments_layer_over_existing_overrides() {
        let mut external = json!({"configurable": {"language": "french", "search_api": "exa"}});
        apply_assignments(&mut external, &["language=english".to_string()]).expect("apply");
        assert_eq!(external, json!({"configurable": {"language": "english", "search_api": "exa"}}));
    }

    #[test]
    fn test_assignments_replace_malformed_structure() {
        let mut external = json!({"configurable": "oops"});
        apply_assignments(&mut external, &["number_of_queries=4".to_string()]).expect("apply");
        assert_eq!(external, json!({"configurable": {"number_of_queries": 4}}));

        let mut external = json!([1, 2]);
        apply_assignments(&mut external, &["max_search_depth=3".to_string()]).expect("apply");
        assert_eq!(external["configurable"]["max_search_depth"], json!(3));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut external = json!({});
        let err = apply_assignments(&mut external, &["languages=english".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Unknown configuration field"));
    }
}
