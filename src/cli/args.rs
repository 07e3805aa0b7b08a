//! CLI argument definitions
//!
//! Clap derive structs for `solmark` command-line parsing. Every flag is
//! optional; with none given the tool reads `PARENT_JSON_FILE_NAME` and the
//! default directories.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SOLUTIONS_DIR};
use crate::observability::LogFormat;

/// Render a question/solution JSON file into Markdown.
///
/// Reads `<solutions-dir><NAME>_solutions.json` and writes
/// `<output-dir>/_markdown.md`.
#[derive(Parser, Debug)]
#[command(name = "solmark", author, version, about)]
pub struct Cli {
    /// Solutions set name.
    #[arg(long, env = "PARENT_JSON_FILE_NAME")]
    pub name: Option<OsString>,

    /// Directory holding the `*_solutions.json` files.
    #[arg(long, default_value = DEFAULT_SOLUTIONS_DIR, env = "SOLMARK_SOLUTIONS_DIR")]
    pub solutions_dir: PathBuf,

    /// Directory the Markdown file is written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "SOLMARK_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "SOLMARK_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}
