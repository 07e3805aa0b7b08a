//! Load → render → write.
//!
//! Each step awaits the previous one; no two filesystem operations overlap.
//! The output directory is only touched once the input has been loaded and
//! rendered, so a failed load leaves the output location unchanged.

use std::path::PathBuf;

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::SolmarkError;
use crate::loader::load_document;
use crate::render::render_markdown;
use crate::writer::write_markdown;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// File the Markdown was written to.
    pub output_path: PathBuf,

    /// Number of records rendered.
    pub records: usize,

    /// Length of the rendered Markdown in bytes.
    pub bytes: usize,
}

/// Runs one conversion.
///
/// # Errors
///
/// Returns the first load or write failure. Nothing is retried and no
/// partial output is produced by a failed load.
pub async fn run(config: &PipelineConfig) -> Result<PipelineReport, SolmarkError> {
    let records = load_document(&config.input_path).await?;
    info!(
        path = %config.input_path.display(),
        records = records.len(),
        "loaded solutions"
    );

    let markdown = render_markdown(&records);

    write_markdown(&config.output_dir, &config.output_path, &markdown).await?;
    info!(path = %config.output_path.display(), "markdown generated");

    Ok(PipelineReport {
        output_path: config.output_path.clone(),
        records: records.len(),
        bytes: markdown.len(),
    })
}
