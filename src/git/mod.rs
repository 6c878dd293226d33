//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. Reading `.git` internals
//! outside this module is prohibited. No other module should import `git2`.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening (git-root resolution)
//! - Locating the pending commit message file
//! - Merge/rebase state detection
//!
//! # Example
//!
//! ```ignore
//! use commitlint_hook::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let message_path = git.commit_message_path();
//! let state = git.state();
//! ```

mod interface;

pub use interface::{Git, GitError, GitState, RepoInfo, COMMIT_MESSAGE_FILE};
