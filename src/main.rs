//! research-config: resolve research pipeline configuration
//!
//! Prints the configuration a research/report-generation pipeline would run
//! with, given the current environment and optional override files.

use anyhow::Result;

fn main() -> Result<()> {
    research_config::cli::run()
}
