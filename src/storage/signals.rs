//! Side-channel files observed by external watcher processes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::writer::{ensure_directory, WriteError};

/// Pointer to the most recent test-result destination. Overwritten on
/// every `/tests` ingestion attempt, successful or not, so a watcher
/// reading it before checking the failure sentinel sees where output was
/// intended to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaPointer {
    pub folder: String,
    pub file: String,
}

/// Overwrite the meta pointer file with `pointer`.
pub async fn emit_meta(meta_path: &Path, pointer: &MetaPointer) -> Result<(), WriteError> {
    if let Some(parent) = meta_path.parent() {
        ensure_directory(parent).await?;
    }
    let data = serde_json::to_vec(pointer)?;
    tokio::fs::write(meta_path, data).await?;
    Ok(())
}

/// Create the failure sentinel, truncating to empty if it already exists.
/// Presence alone is the signal; content is irrelevant. The sentinel is
/// never cleared by this service: removing it after recovery is an
/// operational responsibility of the surrounding system.
pub async fn mark_failure(fail_path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = fail_path.parent() {
        ensure_directory(parent).await?;
    }
    tokio::fs::write(fail_path, b"").await?;
    Ok(())
}
