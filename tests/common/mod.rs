//! Shared integration-test harness: a scratch working directory laid out
//! the way `solmark` expects, plus helpers for running the binary in it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables that must not leak from the test runner into the child.
const ISOLATED_VARS: &[&str] = &[
    "PARENT_JSON_FILE_NAME",
    "SOLMARK_SOLUTIONS_DIR",
    "SOLMARK_OUTPUT_DIR",
    "SOLMARK_LOG_LEVEL",
    "SOLMARK_COLOR",
];

/// A temporary working directory for one `solmark` invocation.
///
/// The directory is removed on drop.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace with a `generate_solutions/` directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("generate_solutions"))
            .expect("failed to create generate_solutions");
        Self { dir }
    }

    /// Root of the workspace; used as the child's working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `generate_solutions/<name>_solutions.json`.
    #[allow(clippy::missing_panics_doc)]
    pub fn write_solutions(&self, name: &str, json: &str) -> PathBuf {
        let path = self
            .path()
            .join("generate_solutions")
            .join(format!("{name}_solutions.json"));
        std::fs::write(&path, json).expect("failed to write solutions file");
        path
    }

    /// Path of the default output file.
    pub fn output_path(&self) -> PathBuf {
        self.path().join("generate_markdown").join("_markdown.md")
    }

    /// Reads the default output file.
    #[allow(clippy::missing_panics_doc)]
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("output file should exist")
    }

    /// Runs `solmark` in the workspace with `PARENT_JSON_FILE_NAME=name`.
    pub fn run_named(&self, name: &str, args: &[&str]) -> Output {
        self.run(&[("PARENT_JSON_FILE_NAME", name)], args)
    }

    /// Runs `solmark` in the workspace with only the given variables set
    /// from the isolated set.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, env: &[(&str, &str)], args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_solmark");
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.path()).args(args);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run solmark")
    }
}

/// Formats child output for assertion messages.
pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
