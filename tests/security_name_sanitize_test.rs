//! Security tests for path traversal prevention.
//!
//! Destination file names are built from attacker-reachable JSON fields;
//! every component must be rejected before any filesystem access when it
//! could escape the results roots.

use harness_bridge::storage::{FileKey, PerfKey, ValidationError};
use serde_json::json;

fn test_payload(target: &str) -> serde_json::Value {
    json!({
        "isBrowser": false, "targetName": target,
        "isCompiled": false, "isSandboxed": false
    })
}

#[test]
fn reject_relative_path_escape() {
    let err = FileKey::from_payload(&test_payload("../../../etc/passwd")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn reject_forward_slash() {
    let err = FileKey::from_payload(&test_payload("a/b")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn reject_backslash() {
    let err = FileKey::from_payload(&test_payload("..\\windows\\system32")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn reject_double_dot_without_separator() {
    // ".." anywhere is refused, even when no separator is present.
    let err = FileKey::from_payload(&test_payload("name..")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn reject_nul_byte() {
    let err = FileKey::from_payload(&test_payload("name\0")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn reject_empty_target_name() {
    let err = FileKey::from_payload(&test_payload("")).unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("targetName"));
}

#[test]
fn browser_payloads_never_consult_target_name() {
    // isBrowser fixes the target part to html5, so a hostile targetName is
    // irrelevant there.
    let key = FileKey::from_payload(&json!({
        "isBrowser": true, "targetName": "../../etc",
        "isCompiled": false, "isSandboxed": false
    }))
    .unwrap();
    assert_eq!(key.file_name(), "html5_vm.json");
}

#[test]
fn reject_traversal_in_performance_fields() {
    let err = PerfKey::from_payload(&json!({
        "platformName": "../escape", "runnerName": "cpp"
    }))
    .unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("platformName"));

    let err = PerfKey::from_payload(&json!({
        "platformName": "windows", "runnerName": "c/pp"
    }))
    .unwrap_err();
    assert_eq!(err, ValidationError::UnsafeName("runnerName"));
}

#[test]
fn accept_ordinary_names() {
    let key = FileKey::from_payload(&test_payload("operagx")).unwrap();
    assert_eq!(key.file_name(), "operagx_vm.json");

    let key = PerfKey::from_payload(&json!({
        "platformName": "macos-arm64", "runnerName": "vm"
    }))
    .unwrap();
    assert_eq!(key.file_name(), "macos-arm64_vm.json");
}
