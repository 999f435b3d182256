//! Error types for the rule-check client

use thiserror::Error;

/// Message shown for any transport, status, or body failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error checking document. Please try again.";

#[derive(Error, Debug)]
pub enum RuleCheckError {
    #[error("Invalid file type: expected application/pdf, got {0}")]
    InvalidFileType(String),

    #[error("No document selected")]
    NoDocument,

    #[error("No non-blank rules to check")]
    NoRules,

    #[error("A submission is already in flight")]
    SubmissionInProgress,

    #[error("Rule index {0} out of range")]
    RuleIndexOutOfRange(usize),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl RuleCheckError {
    /// Fixed message surfaced to the user for this error.
    ///
    /// Service failures all collapse to one generic message; the detail is
    /// only logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            RuleCheckError::InvalidFileType(_) => "Please select a PDF file",
            RuleCheckError::NoDocument => "Please upload a PDF file",
            RuleCheckError::NoRules => "Please enter at least one rule",
            RuleCheckError::SubmissionInProgress => "A check is already in progress",
            RuleCheckError::RuleIndexOutOfRange(_) => "Only three rules can be entered",
            RuleCheckError::Http(_)
            | RuleCheckError::Status { .. }
            | RuleCheckError::MalformedResponse(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// True for failures of the network round trip itself.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            RuleCheckError::Http(_)
                | RuleCheckError::Status { .. }
                | RuleCheckError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RuleCheckError>;
