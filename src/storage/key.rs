//! Destination naming for result payloads.
//!
//! File names are a pure function of payload attributes. The attribute
//! strings originate from attacker-reachable JSON fields, so every
//! component that ends up in a file name is validated against path
//! separators and traversal sequences before any filesystem access.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field has the wrong type: {0}")]
    WrongType(&'static str),

    #[error("field contains a path-unsafe value: {0}")]
    UnsafeName(&'static str),
}

/// Deterministic file name for a test-result payload, derived from the
/// `isBrowser` / `targetName` / `isCompiled` / `isSandboxed` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKey {
    target: String,
    runner: &'static str,
    sandboxed: bool,
}

impl FileKey {
    /// Derive the key from a raw JSON payload.
    ///
    /// `targetName` is required (and must be a string) unless `isBrowser`
    /// is set, in which case the target part is fixed to `html5`.
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let is_browser = require_bool(body, "isBrowser")?;
        let is_compiled = require_bool(body, "isCompiled")?;
        let is_sandboxed = require_bool(body, "isSandboxed")?;

        let target = if is_browser {
            "html5".to_string()
        } else {
            let name = require_string(body, "targetName")?;
            check_name_component("targetName", &name)?;
            name
        };

        Ok(Self {
            target,
            runner: if is_compiled { "yyc" } else { "vm" },
            sandboxed: is_sandboxed,
        })
    }

    /// File stem without the `.json` extension, as advertised in the meta
    /// pointer.
    pub fn file_stem(&self) -> String {
        let sandbox = if self.sandboxed { "_sandboxed" } else { "" };
        format!("{}_{}{}", self.target, self.runner, sandbox)
    }

    /// Full destination file name.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }
}

/// Deterministic file name for a performance-result payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfKey {
    platform: String,
    runner: String,
}

impl PerfKey {
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let platform = require_string(body, "platformName")?;
        check_name_component("platformName", &platform)?;
        let runner = require_string(body, "runnerName")?;
        check_name_component("runnerName", &runner)?;
        Ok(Self { platform, runner })
    }

    pub fn file_name(&self) -> String {
        format!("{}_{}.json", self.platform, self.runner)
    }
}

fn require_bool(body: &Value, field: &'static str) -> Result<bool, ValidationError> {
    match body.get(field) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::WrongType(field)),
        None => Err(ValidationError::MissingField(field)),
    }
}

fn require_string(body: &Value, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType(field)),
        None => Err(ValidationError::MissingField(field)),
    }
}

/// Reject name components that could escape the destination directory.
fn check_name_component(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let unsafe_component = value.is_empty()
        || value.contains('/')
        || value.contains('\\')
        || value.contains('\0')
        || value.contains("..");
    if unsafe_component {
        return Err(ValidationError::UnsafeName(field));
    }
    Ok(())
}
