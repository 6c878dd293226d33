//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Run the hook and print its report
//! - Map the outcome to a process exit code
//!
//! # Exit Codes
//!
//! - `0`: message accepted, or skipped because a merge/rebase is in progress
//! - `1`: message rejected
//! - `2`: the hook could not run (no repository, unreadable message file)

pub mod args;

pub use args::Cli;

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::hook::{self, HookContext, HookOutcome};
use crate::ui::output::{self, Verbosity};
use crate::ui::report;

/// Exit code for a rejected message.
pub const EXIT_REJECTED: u8 = 1;

/// Exit code when the hook itself failed.
pub const EXIT_ERROR: u8 = 2;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Errors returned here
/// are environment failures; policy violations come back as an exit code.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let ctx = HookContext {
        cwd: cli.cwd.clone(),
        message_file: cli.message_file.clone(),
        verbosity: cli.verbosity(),
        ..HookContext::default()
    };

    let outcome = hook::run(&ctx).context("commit message check could not run")?;
    output::debug(format!("outcome: {}", outcome.status()), ctx.verbosity);

    if cli.json {
        output::data(report::render_json(&outcome)?);
    } else if let HookOutcome::Rejected(violations) = &outcome {
        print_rejection(violations, ctx.verbosity);
    }

    Ok(exit_code(&outcome))
}

/// Exit code for a hook outcome.
pub fn exit_code(outcome: &HookOutcome) -> ExitCode {
    if outcome.allows_commit() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    }
}

fn print_rejection(violations: &[crate::core::policy::Violation], verbosity: Verbosity) {
    if verbosity == Verbosity::Quiet {
        output::diagnostic(report::render_violations(violations));
    } else {
        output::diagnostic(report::render(violations));
    }
}
