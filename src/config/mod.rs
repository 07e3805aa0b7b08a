//! Configuration resolution
//!
//! Derives the input and output paths for one pipeline run. The result is
//! an explicit [`PipelineConfig`] value handed to [`crate::pipeline::run`],
//! so tests can inject their own directories.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming the solutions file to render.
pub const NAME_VAR: &str = "PARENT_JSON_FILE_NAME";

/// Environment variable overriding the solutions directory.
pub const SOLUTIONS_DIR_VAR: &str = "SOLMARK_SOLUTIONS_DIR";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_VAR: &str = "SOLMARK_OUTPUT_DIR";

/// Directory the solutions file is read from.
pub const DEFAULT_SOLUTIONS_DIR: &str = "./generate_solutions/";

/// Suffix appended to the name taken from [`NAME_VAR`].
pub const SOLUTIONS_SUFFIX: &str = "_solutions.json";

/// Directory the Markdown file is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "./generate_markdown";

/// File name of the rendered Markdown inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "_markdown.md";

/// Resolved paths for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Solutions JSON file to read.
    pub input_path: PathBuf,

    /// Directory that must exist before the output is written.
    pub output_dir: PathBuf,

    /// Markdown file to create or overwrite.
    pub output_path: PathBuf,
}

impl PipelineConfig {
    /// Resolves paths from the solutions name and the two directories.
    ///
    /// The input path is the plain concatenation
    /// `<solutions_dir><name>_solutions.json`; a separator is inserted only
    /// when `solutions_dir` does not already end with one. An empty name is
    /// accepted and yields `<solutions_dir>_solutions.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvVarNotSet`] when `name` is `None`, and
    /// [`ConfigError::InvalidValue`] when it is not valid Unicode.
    pub fn resolve(
        name: Option<&OsStr>,
        solutions_dir: &Path,
        output_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let name = name.ok_or_else(|| ConfigError::EnvVarNotSet {
            var: NAME_VAR.to_string(),
        })?;
        let name = name.to_str().ok_or_else(|| ConfigError::InvalidValue {
            var: NAME_VAR.to_string(),
            value: name.to_string_lossy().into_owned(),
        })?;

        let config = Self {
            input_path: input_path(solutions_dir, name),
            output_dir: output_dir.to_path_buf(),
            output_path: output_dir.join(OUTPUT_FILE_NAME),
        };

        debug!(
            input = %config.input_path.display(),
            output = %config.output_path.display(),
            "resolved pipeline paths"
        );

        Ok(config)
    }

    /// Resolves paths for `name` using the default directories.
    #[must_use]
    pub fn with_defaults(name: &str) -> Self {
        let output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
        Self {
            input_path: input_path(Path::new(DEFAULT_SOLUTIONS_DIR), name),
            output_path: output_dir.join(OUTPUT_FILE_NAME),
            output_dir,
        }
    }
}

/// Builds `<dir><name>_solutions.json` by concatenation rather than
/// `Path::join`, so a name with a leading `/` stays inside `dir`.
fn input_path(dir: &Path, name: &str) -> PathBuf {
    let mut path = OsString::from(dir.as_os_str());
    let needs_separator = !path.is_empty()
        && !dir
            .to_string_lossy()
            .chars()
            .last()
            .is_some_and(std::path::is_separator);
    if needs_separator {
        path.push("/");
    }
    path.push(name);
    path.push(SOLUTIONS_SUFFIX);
    PathBuf::from(path)
}
