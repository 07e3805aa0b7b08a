//! Command-line interface
//!
//! Argument parsing and the single command `solmark` runs.

pub mod args;
pub mod commands;
