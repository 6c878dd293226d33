//! Architecture enforcement tests.
//!
//! The layering keeps rule checking pure and Git access in one place:
//! - only `src/git/` may use `git2`
//! - `src/core/` does no I/O and knows nothing about Git or the process
//! - only the binary entry point and the CLI decide the exit code
//!
//! These tests scan the source tree so violations are caught in CI.

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.rs` file under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

/// Source text with the `#[cfg(test)]` module cut off.
fn non_test_source(path: &Path) -> String {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    match content.find("#[cfg(test)]") {
        Some(idx) => content[..idx].to_string(),
        None => content,
    }
}

/// Report every file under `dir` (minus `allowed`) containing any pattern.
fn find_uses(dir: &str, allowed: &str, patterns: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for path in rust_files(Path::new(dir)) {
        if !allowed.is_empty() && path.starts_with(allowed) {
            continue;
        }
        let content = non_test_source(&path);
        for pattern in patterns {
            if content.contains(pattern) {
                violations.push(format!("{}: uses `{}`", path.display(), pattern));
            }
        }
    }
    violations
}

#[test]
fn git2_is_confined_to_git_module() {
    let violations = find_uses("src", "src/git", &["git2::", "use git2"]);
    assert!(
        violations.is_empty(),
        "git2 used outside src/git:\n{}",
        violations.join("\n")
    );
}

#[test]
fn core_is_pure() {
    let violations = find_uses(
        "src/core",
        "",
        &["std::fs", "std::process", "std::env", "crate::git", "println!", "eprintln!"],
    );
    assert!(
        violations.is_empty(),
        "core must not do I/O or reach into git:\n{}",
        violations.join("\n")
    );
}

#[test]
fn only_cli_decides_exit() {
    let violations = find_uses("src", "src/cli", &["process::exit", "ExitCode"])
        .into_iter()
        .filter(|v| !v.starts_with("src/main.rs"))
        .collect::<Vec<_>>();
    assert!(
        violations.is_empty(),
        "exit codes belong to the CLI layer:\n{}",
        violations.join("\n")
    );
}
