//! Workspace walking shared by the architecture tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Every `.rs` file under `crates/`, skipping build output and this crate.
pub fn crate_sources() -> Vec<PathBuf> {
    let crates = workspace_root().join("crates");
    assert!(crates.is_dir(), "crates/ directory not found at {crates:?}");

    walkdir::WalkDir::new(&crates)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Whether a source file holds tests, either as an integration test file or
/// through a `#[cfg(test)]` module.
pub fn is_test_source(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}

/// Path relative to the workspace root, for messages.
pub fn display(path: &Path) -> String {
    path.strip_prefix(workspace_root())
        .unwrap_or(path)
        .display()
        .to_string()
}
