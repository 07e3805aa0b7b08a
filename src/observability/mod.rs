//! Observability module
//!
//! Logging setup for `solmark` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
