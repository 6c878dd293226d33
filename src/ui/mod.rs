//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing helpers
//! - [`report`] - Rendering of hook outcomes (text and JSON)

pub mod output;
pub mod report;
