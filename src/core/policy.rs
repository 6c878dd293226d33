//! core::policy
//!
//! Subject line style rules.
//!
//! # Rules
//!
//! Checked in this order, every rule on every subject:
//! 1. The first character must not be lowercase
//! 2. The subject must not end with `.`
//! 3. At least [`PolicyLimits::min_subject_len`] characters
//! 4. At most [`PolicyLimits::max_subject_len`] characters
//!
//! Violations accumulate; nothing short-circuits. Validation is pure and has
//! no knowledge of the repository or the process.
//!
//! # Example
//!
//! ```
//! use commitlint_hook::core::policy::{validate, PolicyLimits, Violation};
//!
//! let result = validate("fix bug.", &PolicyLimits::default());
//! assert_eq!(
//!     result.violations(),
//!     &[Violation::NotCapitalized, Violation::TrailingPeriod]
//! );
//! ```

/// Shortest accepted subject line, in characters.
pub const DEFAULT_MIN_SUBJECT_LEN: usize = 5;

/// Longest accepted subject line, in characters.
pub const DEFAULT_MAX_SUBJECT_LEN: usize = 50;

/// Length bounds for the subject line.
///
/// Lengths are counted in Unicode scalar values. Both bounds are inclusive:
/// a subject of exactly `min_subject_len` or `max_subject_len` characters
/// passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyLimits {
    pub min_subject_len: usize,
    pub max_subject_len: usize,
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self {
            min_subject_len: DEFAULT_MIN_SUBJECT_LEN,
            max_subject_len: DEFAULT_MAX_SUBJECT_LEN,
        }
    }
}

/// A single broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Subject starts with a lowercase letter.
    NotCapitalized,

    /// Subject ends with a period.
    TrailingPeriod,

    /// Subject is shorter than the minimum.
    TooShort { min: usize },

    /// Subject is longer than the maximum.
    TooLong { max: usize },
}

impl Violation {
    /// Stable identifier of the rule that was broken.
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::NotCapitalized => "capitalization",
            Violation::TrailingPeriod => "trailing-period",
            Violation::TooShort { .. } => "min-length",
            Violation::TooLong { .. } => "max-length",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NotCapitalized => {
                write!(f, "The first letter of your subject line must be capitalized.")
            }
            Violation::TrailingPeriod => write!(f, "Your subject must not end in a period \".\""),
            Violation::TooShort { min } => write!(
                f,
                "Too short subject line in git commit message! Min {} characters.",
                min
            ),
            Violation::TooLong { max } => write!(
                f,
                "Too long subject line in git commit message! Max {} characters.",
                max
            ),
        }
    }
}

/// Outcome of checking one subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    /// Non-empty, in rule evaluation order.
    Rejected(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// Violations found; empty when accepted.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Accepted => &[],
            ValidationResult::Rejected(violations) => violations,
        }
    }
}

/// Check a subject line against every rule.
pub fn validate(subject: &str, limits: &PolicyLimits) -> ValidationResult {
    let mut violations = Vec::new();

    if subject.chars().next().is_some_and(is_lowercase_letter) {
        violations.push(Violation::NotCapitalized);
    }

    if subject.ends_with('.') {
        violations.push(Violation::TrailingPeriod);
    }

    let len = subject.chars().count();
    if len < limits.min_subject_len {
        violations.push(Violation::TooShort {
            min: limits.min_subject_len,
        });
    }
    if len > limits.max_subject_len {
        violations.push(Violation::TooLong {
            max: limits.max_subject_len,
        });
    }

    if violations.is_empty() {
        ValidationResult::Accepted
    } else {
        ValidationResult::Rejected(violations)
    }
}

/// True when uppercasing changes `c` and lowercasing does not.
///
/// Characters without case (digits, punctuation, most scripts) pass.
fn is_lowercase_letter(c: char) -> bool {
    let unchanged_upper = c.to_uppercase().eq(std::iter::once(c));
    let unchanged_lower = c.to_lowercase().eq(std::iter::once(c));
    !unchanged_upper && unchanged_lower
}
