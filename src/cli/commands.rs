//! Command handler.
//!
//! Turns parsed arguments into a [`PipelineConfig`], runs the pipeline and
//! prints the confirmation line.

use tracing::debug;

use crate::cli::args::Cli;
use crate::config::PipelineConfig;
use crate::error::SolmarkError;
use crate::pipeline::{self, PipelineReport};

/// Resolves the pipeline configuration from parsed arguments.
///
/// # Errors
///
/// Returns a configuration error if no solutions name was supplied.
pub fn resolve_config(cli: &Cli) -> Result<PipelineConfig, SolmarkError> {
    let config =
        PipelineConfig::resolve(cli.name.as_deref(), &cli.solutions_dir, &cli.output_dir)?;
    Ok(config)
}

/// Executes a full run and prints `Markdown file has been generated at <path>`
/// to stdout on success.
///
/// # Errors
///
/// Returns the configuration, load or write error that ended the run.
pub async fn run(cli: &Cli) -> Result<PipelineReport, SolmarkError> {
    let config = resolve_config(cli)?;
    let report = pipeline::run(&config).await?;

    debug!(records = report.records, bytes = report.bytes, "run complete");
    println!(
        "Markdown file has been generated at {}",
        report.output_path.display()
    );

    Ok(report)
}
