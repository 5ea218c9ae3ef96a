//! Hygiene — enforces coding standards at test time
//!
//! Scans the behavior crate's production sources for antipatterns that
//! violate project standards. Every budget is zero and stays zero: the theme
//! degrades silently by design, so nothing in this crate may panic or
//! silently discard an error.

use std::fs;
use std::path::Path;

/// (needle, what it means) — all budgets are zero.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics with a message"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "explicit panic"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn sources_are_scanned() {
    assert!(!source_files().is_empty(), "hygiene scan found no source files under src/");
}

#[test]
fn forbidden_patterns_are_absent() {
    let files = source_files();
    let mut violations = Vec::new();
    for (needle, meaning) in FORBIDDEN {
        for file in &files {
            for (lineno, line) in file.content.lines().enumerate() {
                if line.contains(needle) {
                    violations.push(format!(
                        "  {}:{}: `{}` ({meaning})",
                        file.path,
                        lineno + 1,
                        needle
                    ));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations found:\n{}",
        violations.join("\n")
    );
}
