//! Markdown output writer.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::WriteError;

/// Creates `dir` if it does not exist yet.
///
/// Creation is not recursive: a missing parent is an error. Returns `true`
/// when the directory was created by this call.
///
/// # Errors
///
/// Returns [`WriteError::CreateDir`] if the directory cannot be created.
pub async fn ensure_dir(dir: &Path) -> Result<bool, WriteError> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => {
            info!(dir = %dir.display(), "created output directory");
            Ok(true)
        }
        // An existing non-directory surfaces later as a write error.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Ensures `dir` exists, then writes `contents` to `path`, replacing any
/// previous file.
///
/// # Errors
///
/// Returns [`WriteError`] if the directory cannot be created or the file
/// cannot be written.
pub async fn write_markdown(dir: &Path, path: &Path, contents: &str) -> Result<(), WriteError> {
    ensure_dir(dir).await?;

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = contents.len(), "markdown written");
    Ok(())
}
