//! commitlint-hook - a commit-msg hook that enforces subject line style
//!
//! The hook reads the pending commit message, checks its subject line
//! against a small set of rules, and either lets the commit through or
//! blocks it with a report. Commits created while a merge or rebase is in
//! progress are never checked.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and exit codes
//! - [`hook`] - Gathers inputs from the repository and decides the outcome
//! - [`core`] - Pure domain logic: the message and the rules
//! - [`git`] - Single interface for all Git access
//! - [`ui`] - Report rendering and diagnostics

pub mod cli;
pub mod core;
pub mod git;
pub mod hook;
pub mod ui;
