//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with an empty environment so host variables such as `LANGUAGE`
/// cannot leak into resolution.
fn research_config(cwd: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("research-config"));
    cmd.env_clear().current_dir(cwd.path());
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("research-config"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("research-config"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("research-config"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("fields"));
}

#[test]
fn test_resolve_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.arg("resolve");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""number_of_queries": 2"#))
        .stdout(predicate::str::contains(r#""max_search_depth": 2"#))
        .stdout(predicate::str::contains(r#""search_api": "tavily""#))
        .stdout(predicate::str::contains(r#""language": "japanese""#))
        .stdout(predicate::str::contains(r#""planner_model": "gpt-4o""#));
}

#[test]
fn test_resolve_language_from_environment() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.env("LANGUAGE", "english").arg("resolve");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "english""#))
        .stdout(predicate::str::contains(r#""search_api": "tavily""#));
}

#[test]
fn test_resolve_overrides_from_set() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--set", "search_api=exa", "--set", "number_of_queries=5"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""search_api": "exa""#))
        .stdout(predicate::str::contains(r#""number_of_queries": 5"#));
}

#[test]
fn test_empty_env_value_falls_through_to_override() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.env("NUMBER_OF_QUERIES", "").args(["resolve", "--set", "number_of_queries=7"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""number_of_queries": 7"#));
}

#[test]
fn test_environment_beats_override() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.env("SEARCH_API", "arxiv").args(["resolve", "--set", "search_api=exa"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""search_api": "arxiv""#));
}

#[test]
fn test_resolve_from_config_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("run.toml");
    fs::write(
        &path,
        "[configurable]\nplanner_provider = \"anthropic\"\nplanner_model = \"claude-3-5-sonnet-latest\"\n",
    )
    .expect("write");

    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--config", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""planner_provider": "anthropic""#))
        .stdout(predicate::str::contains(r#""planner_model": "claude-3-5-sonnet-latest""#))
        .stdout(predicate::str::contains(r#""writer_provider": "openai""#));
}

#[test]
fn test_resolve_discovers_config_in_current_dir() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("research-config.yaml"), "configurable:\n  language: korean\n")
        .expect("write");

    let mut cmd = research_config(&tmp);
    cmd.arg("resolve");
    cmd.assert().success().stdout(predicate::str::contains(r#""language": "korean""#));

    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--no-discover"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""language": "japanese""#));
}

#[test]
fn test_invalid_search_api_fails() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--set", "search_api=bing"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'bing' for search_api"));
}

#[test]
fn test_unknown_field_fails() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--set", "temperature=0.5"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration field 'temperature'"));
}

#[test]
fn test_zero_override_needs_strict() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--set", "max_search_depth=0"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""max_search_depth": 2"#));

    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--strict", "--set", "max_search_depth=0"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""max_search_depth": 0"#));
}

#[test]
fn test_env_prefix() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.env("LANGUAGE", "english")
        .env("RESEARCH_LANGUAGE", "german")
        .args(["resolve", "--env-prefix", "RESEARCH_"]);
    cmd.assert().success().stdout(predicate::str::contains(r#""language": "german""#));
}

#[test]
fn test_resolve_yaml_output() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--format", "yaml"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("language: japanese"))
        .stdout(predicate::str::contains("search_api: tavily"));
}

#[test]
fn test_resolve_toml_output() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.args(["resolve", "--format", "toml", "--set", "search_api=pubmed"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"language = "japanese""#))
        .stdout(predicate::str::contains(r#"search_api = "pubmed""#))
        .stdout(predicate::str::contains("number_of_queries = 2"))
        .stdout(predicate::str::contains("[search_api_config]"))
        .stdout(predicate::str::contains("max_results = 5"));
}

#[test]
fn test_uppercase_search_api_fails() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.env("SEARCH_API", "EXA").arg("resolve");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'EXA' for search_api"));
}

#[test]
fn test_fields_lists_environment_variables() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = research_config(&tmp);
    cmd.arg("fields");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NUMBER_OF_QUERIES"))
        .stdout(predicate::str::contains("SEARCH_API_CONFIG"))
        .stdout(predicate::str::contains("perplexity | tavily | exa | arxiv | pubmed | linkup"));
}
