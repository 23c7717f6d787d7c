//! Startup configuration loading.
//!
//! The launch parameters `runtime` and `port` are positional; payload size
//! limits and the workspace root come from `HB_*` environment variables.
//! Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `HB_WORKSPACE` | `workspace` | Root directory for results and sentinels |
//! | `HB_MAX_POST_PAYLOAD` | 52428800 | Max HTTP POST body size (bytes) |
//! | `HB_MAX_WS_PAYLOAD` | 1000000 | Max WebSocket message size (bytes, 0 = unlimited) |

use std::path::PathBuf;

use crate::RuntimeConfig;

/// Default runtime identifier when no positional argument is given.
pub const DEFAULT_RUNTIME: &str = "0.0.0.0";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum HTTP POST body size: 50 MiB.
pub const DEFAULT_MAX_POST_PAYLOAD: usize = 52_428_800;

/// Default maximum WebSocket message size. Zero disables the limit.
pub const DEFAULT_MAX_WS_PAYLOAD: usize = 1_000_000;

// POST bodies below this size would not fit a minimal result payload.
const MIN_POST_PAYLOAD: usize = 1024;

/// Parse a `usize` env var, returning `default` on missing or invalid.
fn parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(val) => val.parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Build the effective configuration from positional launch parameters and
/// environment overrides.
///
/// Missing or invalid values fall back to safe defaults without panicking.
pub fn load(runtime: Option<String>, port: Option<u16>) -> RuntimeConfig {
    let workspace = std::env::var("HB_WORKSPACE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("workspace"));

    let max_post_payload =
        parse_usize("HB_MAX_POST_PAYLOAD", DEFAULT_MAX_POST_PAYLOAD).max(MIN_POST_PAYLOAD);
    // 0 is meaningful here: it disables the websocket size limit.
    let max_ws_payload = parse_usize("HB_MAX_WS_PAYLOAD", DEFAULT_MAX_WS_PAYLOAD);

    RuntimeConfig {
        runtime: runtime.unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
        port: port.unwrap_or(DEFAULT_PORT),
        workspace,
        max_post_payload,
        max_ws_payload,
    }
}
