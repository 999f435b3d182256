//! Wire and form types shared by the collector, submitter, and renderer

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleCheckError};

/// Media type a selected document must declare.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Number of rule fields on the form.
pub const RULE_SLOTS: usize = 3;

/// The three rule fields, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleText {
    slots: [String; RULE_SLOTS],
}

impl RuleText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text at `index`. Any text is accepted, including blanks.
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(RuleCheckError::RuleIndexOutOfRange(index))?;
        *slot = text.into();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Rules that are non-blank after trimming, in slot order.
    ///
    /// The text itself is passed through untrimmed.
    pub fn non_blank(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|rule| !rule.trim().is_empty())
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> From<[S; RULE_SLOTS]> for RuleText {
    fn from(rules: [S; RULE_SLOTS]) -> Self {
        Self {
            slots: rules.map(Into::into),
        }
    }
}

/// The chosen document and the media type it was declared with
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedDocument {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Media type comparison ignores case and parameters (`; charset=...`).
    pub fn is_pdf(&self) -> bool {
        self.media_type
            .split(';')
            .next()
            .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
            .unwrap_or(false)
    }
}

// Keep document bytes out of debug logs
impl std::fmt::Debug for SelectedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedDocument")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
        }
    }
}

/// Evaluated outcome for one rule, as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Echo of the submitted rule text
    pub rule: String,
    pub status: CheckStatus,
    pub evidence: String,
    pub reasoning: String,
    /// Percentage, nominally 0-100. Stored as sent.
    pub confidence: f64,
}

/// Response body of the check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResultsResponse {
    pub results: Vec<CheckResult>,
}
