//! Durable JSON writes under the results roots.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("filesystem operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Create `dir` and any missing parents. Idempotent; an existing directory
/// is not an error.
pub async fn ensure_directory(dir: &Path) -> Result<(), WriteError> {
    match tokio::fs::create_dir_all(dir).await {
        Ok(()) => {
            debug!(dir = %dir.display(), "directory ready");
            Ok(())
        }
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "directory creation failed");
            Err(WriteError::Io(err))
        }
    }
}

/// Serialize `body` and write it to `{root}/{file_name}`, fully replacing
/// any previous file at that path.
///
/// There is no atomic rename: a crash mid-write may leave a truncated
/// file. Concurrent writers to the same destination race and the last
/// write to complete wins.
pub async fn write_json(
    root: &Path,
    file_name: &str,
    body: &serde_json::Value,
) -> Result<(), WriteError> {
    ensure_directory(root).await?;
    let path = root.join(file_name);
    let data = serde_json::to_vec(body)?;
    let bytes = data.len();
    tokio::fs::write(&path, data).await?;
    debug!(path = %path.display(), bytes, "result stored");
    Ok(())
}
