//! Fields command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use super::utils::preview;
use crate::config::FIELDS;
use crate::domain::Configuration;

#[derive(Args)]
pub struct FieldsArgs {
    /// Print the field table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FieldRow {
    name: &'static str,
    env: String,
    expected: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    members: Vec<&'static str>,
    default: Value,
}

fn field_rows() -> Result<Vec<FieldRow>> {
    let defaults = serde_json::to_value(Configuration::default())?;
    Ok(FIELDS
        .iter()
        .map(|spec| FieldRow {
            name: spec.name,
            env: spec.env_key(),
            expected: spec.kind.expected(),
            members: spec.kind.members(),
            default: defaults.get(spec.name).cloned().unwrap_or(Value::Null),
        })
        .collect())
}

pub fn run(args: FieldsArgs) -> Result<()> {
    let rows = field_rows()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<22} {:<22} {}", row.name, row.env, preview(&row.default));
        if row.members.is_empty() {
            println!("  {}", row.expected);
        } else {
            println!("  {}: {}", row.expected, row.members.join(" | "));
        }
    }
    Ok(())
}
