//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to the repository. The hook needs
//! exactly two things from Git: where the metadata directory lives (to find
//! the pending commit message) and whether a merge or rebase is paused.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//!
//! # Example
//!
//! ```ignore
//! use commitlint_hook::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! if git.state().skips_message_policy() {
//!     println!("{} in progress", git.state());
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File git writes the message being committed to, relative to the git dir.
pub const COMMIT_MESSAGE_FILE: &str = "COMMIT_EDITMSG";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,
}

/// Information about a Git repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Path to .git directory
    pub git_dir: PathBuf,
    /// Path to working directory (the git root)
    pub work_dir: PathBuf,
}

/// State of in-progress Git operations.
///
/// This enum represents the various states a Git repository can be in
/// when an operation is paused (usually due to conflicts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitState {
    /// No operation in progress.
    Clean,

    /// Rebase in progress.
    Rebase {
        /// Current step in the rebase (1-indexed), if available.
        current: Option<usize>,
        /// Total steps in the rebase, if available.
        total: Option<usize>,
    },

    /// Merge in progress.
    Merge,

    /// Cherry-pick in progress.
    CherryPick,

    /// Revert in progress.
    Revert,

    /// Bisect in progress.
    Bisect,

    /// Apply mailbox in progress.
    ApplyMailbox,
}

impl GitState {
    /// Whether the commit being written was generated by a merge or rebase.
    ///
    /// These are the states git signals through `MERGE_HEAD`,
    /// `rebase-merge/` or `rebase-apply/`. Messages written in them are not
    /// held to the authoring rules.
    ///
    /// # Example
    ///
    /// ```
    /// use commitlint_hook::git::GitState;
    ///
    /// assert!(GitState::Merge.skips_message_policy());
    /// assert!(!GitState::CherryPick.skips_message_policy());
    /// assert!(!GitState::Clean.skips_message_policy());
    /// ```
    pub fn skips_message_policy(&self) -> bool {
        matches!(
            self,
            GitState::Merge | GitState::Rebase { .. } | GitState::ApplyMailbox
        )
    }

    /// Get a human-readable description of the state.
    ///
    /// # Example
    ///
    /// ```
    /// use commitlint_hook::git::GitState;
    ///
    /// assert_eq!(GitState::Clean.description(), "clean");
    /// assert_eq!(GitState::Merge.description(), "merge");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            GitState::Clean => "clean",
            GitState::Rebase { .. } => "rebase",
            GitState::Merge => "merge",
            GitState::CherryPick => "cherry-pick",
            GitState::Revert => "revert",
            GitState::Bisect => "bisect",
            GitState::ApplyMailbox => "apply-mailbox",
        }
    }
}

impl std::fmt::Display for GitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitState::Rebase {
                current: Some(c),
                total: Some(t),
            } => write!(f, "rebase ({}/{})", c, t),
            _ => write!(f, "{}", self.description()),
        }
    }
}

/// The Git interface.
///
/// No other module imports `git2` directly.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        // Commit hooks never run in a bare repository
        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository information (git_dir and work_dir paths).
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo { git_dir, work_dir })
    }

    /// Get direct access to the .git directory path.
    ///
    /// For linked worktrees this is the per-worktree directory, which is
    /// where git writes `COMMIT_EDITMSG`.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Path of the pending commit message, `<git dir>/COMMIT_EDITMSG`.
    pub fn commit_message_path(&self) -> PathBuf {
        self.git_dir().join(COMMIT_MESSAGE_FILE)
    }

    // =========================================================================
    // State Detection
    // =========================================================================

    /// Get the current Git state (rebase, merge, etc.).
    ///
    /// libgit2 derives this from the marker files git leaves in the git dir
    /// while an operation is paused. A clean repository yields
    /// [`GitState::Clean`].
    pub fn state(&self) -> GitState {
        match self.repo.state() {
            git2::RepositoryState::Clean => GitState::Clean,
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge
            | git2::RepositoryState::ApplyMailboxOrRebase => {
                let (current, total) = self.read_rebase_progress();
                GitState::Rebase { current, total }
            }
            git2::RepositoryState::Merge => GitState::Merge,
            git2::RepositoryState::CherryPick | git2::RepositoryState::CherryPickSequence => {
                GitState::CherryPick
            }
            git2::RepositoryState::Revert | git2::RepositoryState::RevertSequence => {
                GitState::Revert
            }
            git2::RepositoryState::Bisect => GitState::Bisect,
            git2::RepositoryState::ApplyMailbox => GitState::ApplyMailbox,
        }
    }

    /// Read rebase progress from .git/rebase-merge or .git/rebase-apply.
    fn read_rebase_progress(&self) -> (Option<usize>, Option<usize>) {
        let git_dir = self.repo.path();

        // Try rebase-merge first (interactive rebase)
        let rebase_merge = git_dir.join("rebase-merge");
        if rebase_merge.exists() {
            return (
                read_counter(&rebase_merge.join("msgnum")),
                read_counter(&rebase_merge.join("end")),
            );
        }

        // Try rebase-apply (non-interactive rebase)
        let rebase_apply = git_dir.join("rebase-apply");
        if rebase_apply.exists() {
            return (
                read_counter(&rebase_apply.join("next")),
                read_counter(&rebase_apply.join("last")),
            );
        }

        (None, None)
    }
}

/// Parse a single integer from a rebase bookkeeping file.
fn read_counter(path: &Path) -> Option<usize> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
}
