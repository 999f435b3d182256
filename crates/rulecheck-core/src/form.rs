//! Form state: the selected document, the rule fields, the last results,
//! and whether a submission is in flight.
//!
//! [`RuleCheckForm`] is a cheap-to-clone handle over shared state so that a
//! renderer and a submitter can observe the same form. The lock is only held
//! for short synchronous sections, never across a network call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::DocumentConfig;
use crate::error::{Result, RuleCheckError};
use crate::notify::{Notifier, TracingNotifier};
use crate::pdf;
use crate::request::CheckRequest;
use crate::types::{CheckResult, RuleText, SelectedDocument};

#[derive(Debug, Default)]
struct FormState {
    document: Option<SelectedDocument>,
    rules: RuleText,
    results: Vec<CheckResult>,
    submitting: bool,
}

/// Shared handle to the form
#[derive(Clone)]
pub struct RuleCheckForm {
    state: Arc<Mutex<FormState>>,
    notifier: Arc<dyn Notifier>,
    page_range: DocumentConfig,
}

impl Default for RuleCheckForm {
    fn default() -> Self {
        Self::new(TracingNotifier)
    }
}

impl RuleCheckForm {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            notifier: Arc::new(notifier),
            page_range: DocumentConfig::default(),
        }
    }

    /// Set the advisory page range used for the page-count warning
    pub fn with_page_range(mut self, page_range: DocumentConfig) -> Self {
        self.page_range = page_range;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Select a document.
    ///
    /// Anything not declared as `application/pdf` is rejected, the user is
    /// notified, and the previous selection stays in place.
    pub fn select_document(&self, document: SelectedDocument) -> Result<()> {
        if !document.is_pdf() {
            warn!(
                "Rejected {} with media type '{}'",
                document.file_name, document.media_type
            );
            let err = RuleCheckError::InvalidFileType(document.media_type);
            self.notify(err.user_message());
            return Err(err);
        }

        match pdf::page_count(&document.bytes) {
            Some(pages) if !self.page_range.contains(pages) => warn!(
                "{} has {} pages; expected {}-{}",
                document.file_name, pages, self.page_range.min_pages, self.page_range.max_pages
            ),
            Some(pages) => debug!("{} has {} pages", document.file_name, pages),
            None => debug!("Could not count pages of {}", document.file_name),
        }

        info!(
            "Selected {} ({} bytes)",
            document.file_name,
            document.bytes.len()
        );
        self.lock().document = Some(document);
        Ok(())
    }

    /// Replace the text of rule field `index` (0-based).
    pub fn edit_rule(&self, index: usize, text: impl Into<String>) -> Result<()> {
        self.lock().rules.set(index, text)
    }

    pub fn document(&self) -> Option<SelectedDocument> {
        self.lock().document.clone()
    }

    pub fn document_name(&self) -> Option<String> {
        self.lock().document.as_ref().map(|d| d.file_name.clone())
    }

    pub fn rules(&self) -> RuleText {
        self.lock().rules.clone()
    }

    pub fn results(&self) -> Vec<CheckResult> {
        self.lock().results.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    /// Check preconditions and move to `submitting` in one step.
    ///
    /// A form that is already submitting is rejected before anything else is
    /// looked at.
    pub(crate) fn begin_submission(&self) -> Result<(SubmissionGuard, CheckRequest)> {
        let mut state = self.lock();

        if state.submitting {
            return Err(RuleCheckError::SubmissionInProgress);
        }
        let document = state.document.clone().ok_or(RuleCheckError::NoDocument)?;
        let request = CheckRequest::new(document, &state.rules);
        if request.rules.is_empty() {
            return Err(RuleCheckError::NoRules);
        }

        state.submitting = true;
        drop(state);

        Ok((
            SubmissionGuard {
                state: Arc::clone(&self.state),
            },
            request,
        ))
    }

    pub(crate) fn replace_results(&self, results: Vec<CheckResult>) {
        self.lock().results = results;
    }
}

impl std::fmt::Debug for RuleCheckForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("RuleCheckForm")
            .field("document", &state.document)
            .field("rules", &state.rules)
            .field("results", &state.results.len())
            .field("submitting", &state.submitting)
            .finish()
    }
}

/// Returns the form to idle when dropped
pub(crate) struct SubmissionGuard {
    state: Arc<Mutex<FormState>>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .submitting = false;
    }
}
