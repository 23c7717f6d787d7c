//! Telemetry for the bridge endpoint.
//!
//! Logging only. Result locations and write failures are reported through
//! the filesystem side channels, not through telemetry.

mod logging;

pub use logging::{init_logging, LogError, LogFormat};
