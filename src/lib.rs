//! Harness Bridge
//!
//! Result-collection and device-bridging endpoint used while testing a
//! runtime build. The service accepts test-result and performance-result
//! JSON payloads over HTTP, persists them to a filesystem layout keyed by
//! target/runner/sandbox attributes, and exposes a WebSocket channel that
//! either performs a device connection handshake or echoes binary frames
//! back to the sender.
//!
//! # Failure reporting
//!
//! Storage failures never surface through HTTP status codes. Ingestion
//! responds `200` regardless; the surrounding automation observes failures
//! through the `.fail` sentinel and locates the most recent test result
//! through the `.meta` pointer. External tooling depends on the always-200
//! behavior, so it is preserved deliberately.

pub mod config;
pub mod server;
pub mod storage;
pub mod telemetry;

use std::net::SocketAddr;
use std::path::PathBuf;

/// Process-wide configuration, fixed once at startup and shared by
/// reference into every handler. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Runtime identifier; namespaces the results roots on disk.
    pub runtime: String,
    /// HTTP listen port.
    pub port: u16,
    /// Workspace root the results layout and the sentinel files live under.
    pub workspace: PathBuf,
    /// Maximum HTTP POST body size in bytes.
    pub max_post_payload: usize,
    /// Maximum WebSocket message size in bytes. `0` disables the limit.
    pub max_ws_payload: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            runtime: config::DEFAULT_RUNTIME.to_string(),
            port: config::DEFAULT_PORT,
            workspace: PathBuf::from("workspace"),
            max_post_payload: config::DEFAULT_MAX_POST_PAYLOAD,
            max_ws_payload: config::DEFAULT_MAX_WS_PAYLOAD,
        }
    }
}

impl RuntimeConfig {
    /// Destination directory for test results.
    pub fn tests_root(&self) -> PathBuf {
        self.workspace.join("results").join("tests").join(&self.runtime)
    }

    /// Destination directory for performance results.
    pub fn performance_root(&self) -> PathBuf {
        self.workspace
            .join("results")
            .join("performance")
            .join(&self.runtime)
    }

    /// Pointer file naming the most recent test-result destination.
    pub fn meta_path(&self) -> PathBuf {
        self.workspace.join(".meta")
    }

    /// Existence-only sentinel marking the most recent write failure.
    pub fn fail_path(&self) -> PathBuf {
        self.workspace.join(".fail")
    }

    /// Listen address. The service always binds all interfaces; the
    /// `runtime` parameter only namespaces the filesystem layout.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_follow_workspace_layout() {
        let cfg = RuntimeConfig {
            runtime: "5.0.99".into(),
            workspace: PathBuf::from("ws"),
            ..Default::default()
        };
        assert_eq!(cfg.tests_root(), PathBuf::from("ws/results/tests/5.0.99"));
        assert_eq!(
            cfg.performance_root(),
            PathBuf::from("ws/results/performance/5.0.99")
        );
        assert_eq!(cfg.meta_path(), PathBuf::from("ws/.meta"));
        assert_eq!(cfg.fail_path(), PathBuf::from("ws/.fail"));
    }

    #[test]
    fn default_matches_launch_defaults() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.runtime, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.max_post_payload, 52_428_800);
        assert_eq!(cfg.max_ws_payload, 1_000_000);
    }
}
