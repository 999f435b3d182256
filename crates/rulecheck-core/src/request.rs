//! Outbound check request
//!
//! A snapshot of the form taken when a submission starts: the selected
//! document plus the non-blank rules, in slot order.

use reqwest::multipart::{Form, Part};

use crate::error::Result;
use crate::types::{RuleText, SelectedDocument, PDF_MEDIA_TYPE};

/// Multipart field carrying the document bytes
pub const PDF_FIELD: &str = "pdf";

/// Multipart field carrying the JSON array of rules
pub const RULES_FIELD: &str = "rules";

#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub document: SelectedDocument,
    pub rules: Vec<String>,
}

impl CheckRequest {
    /// Snapshot `document` and the non-blank entries of `rules`.
    pub fn new(document: SelectedDocument, rules: &RuleText) -> Self {
        Self {
            document,
            rules: rules.non_blank(),
        }
    }

    /// The rules part body: a JSON array of strings
    pub fn rules_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rules)?)
    }

    /// Build the `multipart/form-data` body
    pub fn to_multipart(&self) -> Result<Form> {
        let pdf = Part::bytes(self.document.bytes.clone())
            .file_name(self.document.file_name.clone())
            .mime_str(PDF_MEDIA_TYPE)?;

        Ok(Form::new()
            .part(PDF_FIELD, pdf)
            .text(RULES_FIELD, self.rules_json()?))
    }
}
