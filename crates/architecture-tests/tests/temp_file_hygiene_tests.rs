//! Enforce RAII temp file handling in tests.
//!
//! Tests create scratch repositories and cache databases; all of them must
//! live in `tempfile` directories so a failing test leaves nothing behind.
//!
//! Only source text is checked.

mod common;

use std::fs;

fn has_tests(content: &str) -> bool {
    content.contains("#[test]") || content.contains("#[tokio::test]")
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for path in common::crate_sources() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        if !has_tests(&content) {
            continue;
        }
        let shown = common::display(&path);

        if content.contains("std::env::temp_dir()") {
            violations.push(format!("{shown}: uses std::env::temp_dir(), prefer tempfile"));
        }
        if content.contains("\"/tmp") {
            violations.push(format!("{shown}: hardcoded /tmp path"));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdirs_are_bound() {
    let mut violations = Vec::new();

    for path in common::crate_sources()
        .into_iter()
        .filter(|p| common::is_test_source(p))
    {
        let content = fs::read_to_string(&path).unwrap_or_default();
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            let dropped = trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = NamedTempFile");
            if dropped {
                violations.push(format!(
                    "{}:{}: temp directory bound to `_` is deleted immediately",
                    common::display(&path),
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found temp directories that are dropped at once:\n{}",
        violations.join("\n")
    );
}
