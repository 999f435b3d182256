//! PDF rule-check client
//!
//! Collects one PDF and up to three free-text rules, sends them to a remote
//! evaluation service in a single multipart request, and renders the
//! pass/fail results it returns.
//!
//! - [`form::RuleCheckForm`]: selected document, rule fields, last results,
//!   and the in-flight flag
//! - [`submit::Submitter`]: one validated round trip per call
//! - [`service::RuleCheckService`]: the evaluation backend seam, with
//!   [`service::HttpRuleCheckService`] for the real endpoint
//! - [`render`]: text table and JSON output

pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod pdf;
pub mod render;
pub mod request;
pub mod service;
pub mod submit;
pub mod types;

pub use config::ClientConfig;
pub use error::RuleCheckError;
pub use form::RuleCheckForm;
pub use notify::{Notifier, RecordingNotifier, StderrNotifier, TracingNotifier};
pub use request::CheckRequest;
pub use service::{HttpRuleCheckService, RuleCheckService};
pub use submit::{SubmitOutcome, Submitter};
pub use types::{CheckResult, CheckResultsResponse, CheckStatus, RuleText, SelectedDocument};
