//! hook
//!
//! The commit-msg hook lifecycle: probe the repository, read the pending
//! message, validate the subject.
//!
//! # Architecture
//!
//! [`evaluate`] is pure and decides the outcome from explicit inputs.
//! [`run`] gathers those inputs from the repository (two reads: the state
//! markers and the message file) and hands them to [`evaluate`]. Deciding
//! what the process exits with belongs to the CLI layer.
//!
//! # Example
//!
//! ```
//! use commitlint_hook::core::message::CommitMessage;
//! use commitlint_hook::core::policy::PolicyLimits;
//! use commitlint_hook::git::GitState;
//! use commitlint_hook::hook::{evaluate, HookOutcome};
//!
//! let msg = CommitMessage::new("fix bug.");
//! let outcome = evaluate(&msg, &GitState::Merge, &PolicyLimits::default());
//! assert_eq!(outcome, HookOutcome::Skipped(GitState::Merge));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::message::CommitMessage;
use crate::core::policy::{validate, PolicyLimits, ValidationResult, Violation};
use crate::git::{Git, GitError, GitState};
use crate::ui::output::{self, Verbosity};

/// Errors from the hook environment (not policy violations).
#[derive(Debug, Error)]
pub enum HookError {
    /// The repository could not be opened.
    #[error(transparent)]
    Git(#[from] GitError),

    /// The commit message file could not be read.
    #[error("failed to read commit message '{path}': {source}")]
    ReadMessage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Inputs for one hook invocation.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Directory to discover the repository from (defaults to the process cwd)
    pub cwd: Option<PathBuf>,
    /// Message file to read instead of `<git dir>/COMMIT_EDITMSG`
    pub message_file: Option<PathBuf>,
    /// Subject length bounds
    pub limits: PolicyLimits,
    /// Diagnostic verbosity
    pub verbosity: Verbosity,
}

impl Default for HookContext {
    fn default() -> Self {
        Self {
            cwd: None,
            message_file: None,
            limits: PolicyLimits::default(),
            verbosity: Verbosity::Normal,
        }
    }
}

/// What the hook decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// The subject follows every rule.
    Accepted,
    /// A merge or rebase is in progress; nothing was checked.
    Skipped(GitState),
    /// At least one rule was broken, in rule evaluation order.
    Rejected(Vec<Violation>),
}

impl HookOutcome {
    /// Whether the commit may proceed.
    pub fn allows_commit(&self) -> bool {
        !matches!(self, HookOutcome::Rejected(_))
    }

    /// Short status keyword.
    pub fn status(&self) -> &'static str {
        match self {
            HookOutcome::Accepted => "accepted",
            HookOutcome::Skipped(_) => "skipped",
            HookOutcome::Rejected(_) => "rejected",
        }
    }
}

/// Decide the outcome for a message given the repository state.
///
/// The validator is not consulted at all while a merge or rebase is in
/// progress.
pub fn evaluate(message: &CommitMessage, state: &GitState, limits: &PolicyLimits) -> HookOutcome {
    if state.skips_message_policy() {
        return HookOutcome::Skipped(state.clone());
    }

    match validate(message.subject(), limits) {
        ValidationResult::Accepted => HookOutcome::Accepted,
        ValidationResult::Rejected(violations) => HookOutcome::Rejected(violations),
    }
}

/// Run the hook against the repository containing `ctx.cwd`.
///
/// # Errors
///
/// - [`HookError::Git`] if no usable repository is found
/// - [`HookError::ReadMessage`] if the message file cannot be read
pub fn run(ctx: &HookContext) -> Result<HookOutcome, HookError> {
    let cwd = match &ctx.cwd {
        Some(path) => path.clone(),
        None => PathBuf::from("."),
    };

    let git = Git::open(&cwd)?;
    let info = git.info()?;
    output::debug(
        format!(
            "git root: {} (git dir {})",
            info.work_dir.display(),
            info.git_dir.display()
        ),
        ctx.verbosity,
    );

    let state = git.state();
    output::debug(format!("repository state: {}", state), ctx.verbosity);

    if state.skips_message_policy() {
        return Ok(HookOutcome::Skipped(state));
    }

    let path = match &ctx.message_file {
        Some(file) => resolve_against(&cwd, file),
        None => git.commit_message_path(),
    };
    output::debug(format!("reading {}", path.display()), ctx.verbosity);

    let message = read_message(&path)?;
    output::debug(format!("subject: {:?}", message.subject()), ctx.verbosity);

    Ok(evaluate(&message, &state, &ctx.limits))
}

/// Read and split a commit message file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_message(path: &Path) -> Result<CommitMessage, HookError> {
    let bytes = std::fs::read(path).map_err(|source| HookError::ReadMessage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CommitMessage::new(&String::from_utf8_lossy(&bytes)))
}

fn resolve_against(base: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base.join(file)
    }
}
