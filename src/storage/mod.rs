//! Filesystem persistence for ingested results.
//!
//! Result files are named deterministically from payload attributes; the
//! same attributes always resolve to the same destination and the last
//! write wins. Two side-channel files are maintained for external watcher
//! processes: the `.meta` pointer (where the most recent test result went)
//! and the `.fail` sentinel (whether the most recent write failed).

mod key;
mod signals;
mod writer;

pub use key::{FileKey, PerfKey, ValidationError};
pub use signals::{emit_meta, mark_failure, MetaPointer};
pub use writer::{ensure_directory, write_json, WriteError};
