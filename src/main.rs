use anyhow::{Context, Result};
use clap::Parser;
use gradecalc::cli::Cli;
use gradecalc::config::{load_config, load_config_from, GradecalcConfig};
use gradecalc::observability::{init_tracing, install_panic_hook};
use gradecalc::tui::GradeExplorer;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity)?;

    let config = resolve_config(&cli)?;
    tracing::debug!(weights = ?config.weights, "configuration resolved");

    let mut explorer = GradeExplorer::new(&config).context("Failed to start terminal UI")?;
    explorer.run()
}

// An explicit --config must load; discovered files fall back to defaults
fn resolve_config(cli: &Cli) -> Result<GradecalcConfig> {
    match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}
