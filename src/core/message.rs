//! core::message
//!
//! The commit message as read from disk.
//!
//! Only the subject line takes part in validation; the remaining lines are
//! kept so callers can inspect the whole message without re-reading it.

/// An immutable, line-split commit message.
///
/// # Example
///
/// ```
/// use commitlint_hook::core::message::CommitMessage;
///
/// let msg = CommitMessage::new("Add login form\n\nWires up the handler.\n");
/// assert_eq!(msg.subject(), "Add login form");
/// assert_eq!(msg.lines().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    /// Split raw message text into lines.
    ///
    /// Lines are separated by `\n`. A `\r` left at the end of a line by a
    /// CRLF editor is dropped.
    pub fn new(raw: &str) -> Self {
        let lines = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// The first line of the message. Empty for an empty message.
    pub fn subject(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// All lines, subject first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
