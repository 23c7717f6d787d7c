//! Ingestion handlers for test and performance result payloads.
//!
//! Both handlers answer `200` even when storage fails; failures are
//! observable only through the `.fail` sentinel. Diagnostic detail (which
//! path failed, which field was missing) goes to the log sink and is never
//! embedded in a response body. The only client error is a malformed
//! payload, which yields `400`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::{error, warn};

use crate::storage::{self, FileKey, MetaPointer, PerfKey};
use crate::RuntimeConfig;

pub(super) async fn store_tests(
    State(config): State<Arc<RuntimeConfig>>,
    Json(body): Json<Value>,
) -> Result<&'static str, StatusCode> {
    let key = FileKey::from_payload(&body).map_err(|err| {
        warn!(error = %err, "rejected test payload");
        StatusCode::BAD_REQUEST
    })?;

    let root = config.tests_root();
    if let Err(err) = storage::write_json(&root, &key.file_name(), &body).await {
        error!(error = %err, folder = %root.display(), "test result write failed");
        if let Err(err) = storage::mark_failure(&config.fail_path()).await {
            error!(error = %err, "failure sentinel write failed");
        }
    }

    // Emitted even when the write failed: the pointer names the
    // destination that was attempted.
    let pointer = MetaPointer {
        folder: root.display().to_string(),
        file: key.file_stem(),
    };
    if let Err(err) = storage::emit_meta(&config.meta_path(), &pointer).await {
        error!(error = %err, "meta pointer write failed");
    }

    Ok("Tests data stored")
}

pub(super) async fn store_performance(
    State(config): State<Arc<RuntimeConfig>>,
    Json(body): Json<Value>,
) -> Result<&'static str, StatusCode> {
    let key = PerfKey::from_payload(&body).map_err(|err| {
        warn!(error = %err, "rejected performance payload");
        StatusCode::BAD_REQUEST
    })?;

    let root = config.performance_root();
    if let Err(err) = storage::write_json(&root, &key.file_name(), &body).await {
        error!(error = %err, folder = %root.display(), "performance result write failed");
        if let Err(err) = storage::mark_failure(&config.fail_path()).await {
            error!(error = %err, "failure sentinel write failed");
        }
    }

    Ok("Performance data stored")
}
