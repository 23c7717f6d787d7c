//! HTTP surface: result ingestion endpoints and the device bridge socket.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/tests` | Store a test-result payload |
//! | POST | `/performance` | Store a performance-result payload |
//! | GET | `/websockets` | Upgrade to the device bridge (`?mode=raw\|handshake`) |

mod bridge;
mod results;

pub use bridge::{BridgeAction, BridgeMode, BridgeSession, HANDSHAKE_REPLY};

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::RuntimeConfig;

/// Build the application router around the shared configuration.
pub fn build_router(config: Arc<RuntimeConfig>) -> Router {
    Router::new()
        .route("/tests", post(results::store_tests))
        .route("/performance", post(results::store_performance))
        .route("/websockets", get(bridge::connect))
        .layer(DefaultBodyLimit::max(config.max_post_payload))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Bind the listen address and serve until a shutdown signal arrives.
///
/// All failures past this point are per-request or per-connection; only
/// bind errors propagate out.
pub async fn serve(config: Arc<RuntimeConfig>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, runtime = %config.runtime, "listening");

    let router = build_router(config);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
