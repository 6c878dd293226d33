//! ui::report
//!
//! Rendering of hook outcomes.
//!
//! The text report is what a developer sees when a commit is blocked: the
//! list of broken rules, a reminder of the seven rules of a good commit
//! message (<https://chris.beams.io/posts/git-commit/#seven-rules>), and how
//! to bypass the hook.

use serde::Serialize;

use super::output::format_list;
use crate::core::policy::Violation;
use crate::hook::HookOutcome;

/// Header printed above the violation list.
pub const HEADER: &str = "Commit message policy violation(s)!";

/// The educational block shown after the violations.
pub const SEVEN_RULES: &str = "\
The 7 rules of a good commit message

    1. Separate subject from body with a blank line
    2. Limit the subject line to 50 characters
    3. Capitalize the subject line
    4. Do not end the subject line with a period
    5. Use the imperative mood in the subject line
    6. Wrap the body at 72 characters
    7. Use the body to explain what and why vs. how";

/// How to get past the hook when the rules do not apply.
pub const BYPASS_NOTE: &str = "You can skip the checks by passing the flag `--no-verify` to Git";

/// Render the full rejection report.
///
/// # Example
///
/// ```
/// use commitlint_hook::core::policy::Violation;
/// use commitlint_hook::ui::report::render;
///
/// let text = render(&[Violation::TrailingPeriod]);
/// assert!(text.starts_with("Commit message policy violation(s)!\n\n - Your subject"));
/// assert!(text.ends_with("`--no-verify` to Git"));
/// ```
pub fn render(violations: &[Violation]) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_violations(violations),
        SEVEN_RULES,
        BYPASS_NOTE
    )
}

/// Render just the header and the bulleted violations.
pub fn render_violations(violations: &[Violation]) -> String {
    format!("{}\n\n{}", HEADER, format_list(violations, " - "))
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonViolation<'a> {
    rule: &'a str,
    message: String,
}

/// Render an outcome as a single-line JSON object.
///
/// # Errors
///
/// Returns the serializer error, which cannot occur for these types in
/// practice.
pub fn render_json(outcome: &HookOutcome) -> Result<String, serde_json::Error> {
    let (state, violations) = match outcome {
        HookOutcome::Accepted => (None, &[][..]),
        HookOutcome::Skipped(state) => (Some(state.to_string()), &[][..]),
        HookOutcome::Rejected(violations) => (None, violations.as_slice()),
    };

    let report = JsonReport {
        status: outcome.status(),
        state,
        violations: violations
            .iter()
            .map(|v| JsonViolation {
                rule: v.rule(),
                message: v.to_string(),
            })
            .collect(),
    };

    serde_json::to_string(&report)
}
