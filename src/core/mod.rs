//! core
//!
//! Core domain types and rules.
//!
//! # Modules
//!
//! - [`message`] - The commit message and its subject line
//! - [`policy`] - Subject line rules and their violations
//!
//! # Design Principles
//!
//! - No I/O: everything here works on values passed in
//! - All validation is deterministic

pub mod message;
pub mod policy;
