//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The hook takes no arguments in its normal wiring: it reads the pending
//! message from the repository that contains the working directory. Every
//! flag below is optional.
//!
//! # Flags
//!
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Print diagnostic detail to stderr
//! - `--quiet` / `-q`: Print only the violations when rejecting
//! - `--json`: Print the outcome as JSON on stdout

use clap::Parser;
use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Check the subject line of the pending commit message
#[derive(Parser, Debug)]
#[command(name = "check-commit-msg")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
HOOK SETUP:
    # git's own hook (git passes the message file as $1)
    echo 'exec check-commit-msg \"$1\"' > .git/hooks/commit-msg
    chmod +x .git/hooks/commit-msg

    # hook runners that do not pass the file
    check-commit-msg

Merges and rebases in progress are never checked.
Bypass the hook for a single commit with `git commit --no-verify`.")]
pub struct Cli {
    /// Message file to check (defaults to <git dir>/COMMIT_EDITMSG)
    #[arg(value_name = "MESSAGE_FILE")]
    pub message_file: Option<PathBuf>,

    /// Run as if check-commit-msg was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Only list violations; omit the commit message guide
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Verbosity implied by `--quiet` and `--debug`.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}
