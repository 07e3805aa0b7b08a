//! `solmark` - render question/solution JSON files into Markdown
//!
//! A single load → render → write pipeline. The library exposes each stage
//! so callers can run the whole conversion with an injected
//! [`config::PipelineConfig`] or use the renderer on its own.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod observability;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use config::PipelineConfig;
pub use document::{InputDocument, Record};
pub use error::{Result, SolmarkError};
pub use render::render_markdown;
