//! Solutions file loader.
//!
//! Reads the whole file into memory and parses it as a JSON array of
//! [`Record`]s. Nothing is streamed.

use std::path::Path;

use tracing::debug;

use crate::document::{InputDocument, Record};
use crate::error::LoadError;

/// Reads and parses the solutions file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file cannot be read, and
/// [`LoadError::Parse`] if its content is not valid UTF-8 JSON whose top
/// level is an array of objects carrying `prompt_response` and `solution`
/// strings.
pub async fn load_document(path: &Path) -> Result<InputDocument, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "solutions file read");

    parse_document(path, &bytes)
}

/// Parses an in-memory solutions document. `path` is only used for errors.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] on malformed content.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<InputDocument, LoadError> {
    let records: Vec<Record> =
        serde_json::from_slice(bytes).map_err(|e| LoadError::parse(path, &e))?;

    debug!(path = %path.display(), records = records.len(), "solutions file parsed");

    Ok(records)
}
