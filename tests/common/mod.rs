//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the `.git` directory.
    pub fn git_dir(&self) -> PathBuf {
        self.path().join(".git")
    }

    /// Write the pending commit message the way `git commit` does.
    pub fn write_commit_message(&self, message: &str) {
        std::fs::write(self.git_dir().join("COMMIT_EDITMSG"), message).unwrap();
    }

    /// Pretend a merge is paused.
    pub fn start_merge(&self) {
        let head = self.head_oid_raw();
        std::fs::write(self.git_dir().join("MERGE_HEAD"), format!("{}\n", head)).unwrap();
    }

    /// Pretend an interactive rebase is paused at `current` of `total`.
    pub fn start_rebase(&self, current: usize, total: usize) {
        let dir = self.git_dir().join("rebase-merge");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("interactive"), "").unwrap();
        std::fs::write(dir.join("msgnum"), format!("{}\n", current)).unwrap();
        std::fs::write(dir.join("end"), format!("{}\n", total)).unwrap();
    }

    /// Pretend a cherry-pick is paused.
    pub fn start_cherry_pick(&self) {
        let head = self.head_oid_raw();
        std::fs::write(self.git_dir().join("CHERRY_PICK_HEAD"), format!("{}\n", head)).unwrap();
    }

    /// Get HEAD OID using git directly.
    pub fn head_oid_raw(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
