//! Submission of the form to the evaluation service
//!
//! One call to [`Submitter::submit`] is one attempt: validate, send exactly
//! one request, then either replace the form's results or leave them alone.
//! Nothing is retried.

use tracing::{error, info, warn};

use crate::error::{Result, RuleCheckError};
use crate::form::RuleCheckForm;
use crate::service::RuleCheckService;

/// Summary of a successful attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Rules sent to the service
    pub submitted_rules: usize,
    /// Results the service returned and the form now holds
    pub result_count: usize,
}

impl SubmitOutcome {
    /// The service answered with a different number of results than rules sent.
    pub fn mismatch(&self) -> bool {
        self.submitted_rules != self.result_count
    }
}

pub struct Submitter<S> {
    form: RuleCheckForm,
    service: S,
}

impl<S: RuleCheckService> Submitter<S> {
    pub fn new(form: RuleCheckForm, service: S) -> Self {
        Self { form, service }
    }

    pub fn form(&self) -> &RuleCheckForm {
        &self.form
    }

    /// Submit the current document and rules.
    ///
    /// Every error is also reported to the form's notifier. While an attempt
    /// is in flight, further calls fail with `SubmissionInProgress` without
    /// touching the network.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let (_guard, request) = match self.form.begin_submission() {
            Ok(started) => started,
            Err(err) => {
                warn!("Submission blocked: {}", err);
                self.form.notify(err.user_message());
                return Err(err);
            }
        };

        info!(
            "Checking {} against {} rule(s) via {}",
            request.document.file_name,
            request.rules.len(),
            self.service.name()
        );

        let response = match self.service.check(&request).await {
            Ok(response) => response,
            Err(err) => {
                if let RuleCheckError::Status { status, body } = &err {
                    error!("Error checking document: HTTP {}: {}", status, body);
                } else {
                    error!("Error checking document: {}", err);
                }
                self.form.notify(err.user_message());
                return Err(err);
            }
        };

        let outcome = SubmitOutcome {
            submitted_rules: request.rules.len(),
            result_count: response.results.len(),
        };
        if outcome.mismatch() {
            warn!(
                "Sent {} rule(s) but received {} result(s); keeping results as returned",
                outcome.submitted_rules, outcome.result_count
            );
        }

        self.form.replace_results(response.results);
        info!("Received {} result(s)", outcome.result_count);

        Ok(outcome)
    }
}
