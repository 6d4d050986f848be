use serde::{Deserialize, Serialize};

use crate::models::language::Language;

/// Shared API limit for submitted code, enforced at the service boundary.
pub const MAX_CODE_CHARS: usize = 10_000;

/// Severity classification of a review issue.
///
/// The wire form is capitalized, but lowercase variants are accepted too
/// because some backend versions emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "bug")]
    Bug,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "improvement")]
    Improvement,
    #[serde(alias = "security")]
    Security,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Bug => "Bug",
            Severity::Warning => "Warning",
            Severity::Improvement => "Improvement",
            Severity::Security => "Security",
        }
    }
}

/// A single issue flagged by the review backend.
///
/// Immutable once received; discarded on the next review, on auto-fix
/// success, or on clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewIssue {
    /// 1-indexed line number; the backend may omit it for file-level issues.
    pub line: Option<u32>,
    pub severity: Severity,
    pub explanation: String,
    #[serde(default)]
    pub suggested_fix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub code: String,
    pub language: Language,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub issues: Vec<ReviewIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoFixRequest {
    pub code: String,
    pub language: Language,
}

/// One concrete change applied by the auto-fix backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoFixChange {
    pub line: Option<u32>,
    pub before: String,
    pub after: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoFixResponse {
    pub fixed_code: String,
    pub summary: String,
    #[serde(default)]
    pub changes: Vec<AutoFixChange>,
}

/// Structured error body returned by the backend on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Why a code submission was rejected before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    Empty,
    TooLong,
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Empty => write!(f, "Code cannot be empty."),
            SubmissionError::TooLong => write!(
                f,
                "Code submission exceeds maximum length of {MAX_CODE_CHARS} characters."
            ),
        }
    }
}

/// Validate a code submission against shared limits.
///
/// Used by the proxy service to reject bad submissions before forwarding,
/// with the same rules the backend applies.
pub fn validate_submission(code: &str) -> Result<(), SubmissionError> {
    if code.chars().count() > MAX_CODE_CHARS {
        return Err(SubmissionError::TooLong);
    }
    if code.trim().is_empty() {
        return Err(SubmissionError::Empty);
    }
    Ok(())
}
