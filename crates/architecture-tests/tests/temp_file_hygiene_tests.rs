//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Resolution tests create real directories to exercise the filesystem
//! probe; those must live in `tempfile` RAII guards so a failing assertion
//! never leaves config directories behind.
//!
//! Invariants:
//! - Tests use the tempfile crate, never `std::env::temp_dir()`.
//! - No hardcoded /tmp paths in tests.
//! - Tempfile guards are bound to a named variable.

mod common;

use std::fs;

use common::{find_workspace_root, workspace_rust_files};

fn files_with_tests() -> Vec<(String, String)> {
    let root = find_workspace_root();
    workspace_rust_files(&root)
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            content
                .contains("#[test]")
                .then(|| (path.display().to_string(), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in files_with_tests() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::TempDir for RAII cleanup"
            ));
        }
        if content.contains("\"/tmp") {
            violations.push(format!(
                "{path}: contains hardcoded /tmp path - prefer tempfile crate"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in files_with_tests() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = tempdir()")
            {
                violations.push(format!(
                    "{}:{}: tempfile instance bound to `_` - use a named variable",
                    path,
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
