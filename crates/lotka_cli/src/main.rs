//! Lotka-Volterra predator-prey runner.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use lotka_core::analysis::run_analysis;
use lotka_core::config::SimulationConfig;

mod cli;
mod logging;
mod summary;

use crate::cli::Cli;
use crate::logging::init_logging;
use crate::summary::render_summary;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbosity.tracing_level_filter()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    let config = cli.apply_overrides(base);
    tracing::debug!(?config, "resolved configuration");

    let analysis = run_analysis(&config)?;
    print!("{}", render_summary(&analysis));
    Ok(())
}

fn load_config(path: &std::path::Path) -> Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
