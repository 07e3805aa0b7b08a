//! Error types for `solmark`
//!
//! One error enum per pipeline stage, aggregated into [`SolmarkError`]
//! which also owns the mapping to process exit codes.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `solmark` runs.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (required environment variable missing or invalid)
    pub const CONFIG_ERROR: i32 = 2;

    /// Input file missing or unreadable
    pub const NOT_FOUND: i32 = 3;

    /// Input file is not a well-formed solutions document
    pub const PARSE_ERROR: i32 = 4;

    /// Output directory or file could not be written
    pub const IO_ERROR: i32 = 5;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for a `solmark` run.
#[derive(Debug, Error)]
pub enum SolmarkError {
    /// Configuration resolution failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading the solutions file failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing the Markdown output failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl SolmarkError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Load(LoadError::NotFound { .. }) => ExitCode::NOT_FOUND,
            Self::Load(LoadError::Parse { .. }) => ExitCode::PARSE_ERROR,
            Self::Write(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration resolution errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("environment variable '{var}' not set")]
    EnvVarNotSet {
        /// Name of the environment variable
        var: String,
    },

    /// Environment variable holds a value that cannot be used in a path
    #[error("invalid value for '{var}': {value}")]
    InvalidValue {
        /// Name of the environment variable
        var: String,
        /// Lossy rendering of the rejected value
        value: String,
    },
}

// ============================================================================
// Load Errors
// ============================================================================

/// Errors raised while reading and parsing the solutions file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist or cannot be read
    #[error("cannot read solutions file {path}: {source}")]
    NotFound {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a JSON array of solution records
    #[error("parse error in {path} at line {line}, column {column}: {message}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Line reported by the parser (1-based, 0 if unknown)
        line: usize,
        /// Column reported by the parser (1-based, 0 if unknown)
        column: usize,
        /// Parser message
        message: String,
    },
}

impl LoadError {
    /// Builds a [`LoadError::Parse`] from a `serde_json` error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Write Errors
// ============================================================================

/// Errors raised while persisting the rendered Markdown.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("cannot write markdown file {path}: {source}")]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `solmark` operations.
pub type Result<T> = std::result::Result<T, SolmarkError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(kind: std::io::ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, "boom")
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::NOT_FOUND, 3);
        assert_eq!(ExitCode::PARSE_ERROR, 4);
        assert_eq!(ExitCode::IO_ERROR, 5);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: SolmarkError = ConfigError::EnvVarNotSet {
            var: "PARENT_JSON_FILE_NAME".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_not_found_exit_code() {
        let err: SolmarkError = LoadError::NotFound {
            path: PathBuf::from("missing.json"),
            source: io_err(std::io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::NOT_FOUND);
    }

    #[test]
    fn test_parse_exit_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SolmarkError = LoadError::parse("bad.json", &json_err).into();
        assert_eq!(err.exit_code(), ExitCode::PARSE_ERROR);
    }

    #[test]
    fn test_write_exit_code() {
        let err: SolmarkError = WriteError::CreateDir {
            path: PathBuf::from("out"),
            source: io_err(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_parse_error_carries_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("[\n  1,\n  }").unwrap_err();
        let err = LoadError::parse("bad.json", &json_err);
        match err {
            LoadError::Parse { line, column, .. } => {
                assert_eq!(line, 3);
                assert!(column > 0);
            }
            LoadError::NotFound { .. } => panic!("expected parse error"),
        }
    }

    #[test]
    fn test_error_display_names_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("./generate_solutions/x_solutions.json"),
            source: io_err(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("x_solutions.json"));

        let err = ConfigError::EnvVarNotSet {
            var: "PARENT_JSON_FILE_NAME".to_string(),
        };
        assert!(err.to_string().contains("PARENT_JSON_FILE_NAME"));
    }
}
