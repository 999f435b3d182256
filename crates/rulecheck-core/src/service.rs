//! Evaluation service abstraction and the HTTP implementation
//!
//! The service is an opaque collaborator: it receives the document and the
//! rules and answers with one result per rule. The submitter only sees the
//! [`RuleCheckService`] trait, so tests can substitute fakes.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{Result, RuleCheckError};
use crate::request::CheckRequest;
use crate::types::CheckResultsResponse;

/// Trait for rule-evaluation backends
#[async_trait]
pub trait RuleCheckService: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &str;

    /// Perform exactly one evaluation round trip
    async fn check(&self, request: &CheckRequest) -> Result<CheckResultsResponse>;
}

#[async_trait]
impl<S: RuleCheckService + ?Sized> RuleCheckService for std::sync::Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn check(&self, request: &CheckRequest) -> Result<CheckResultsResponse> {
        (**self).check(request).await
    }
}

/// Talks to the evaluation service over HTTP
///
/// No timeout is configured: the request runs until the service answers or
/// the connection fails.
#[derive(Debug, Clone)]
pub struct HttpRuleCheckService {
    client: Client,
    endpoint: String,
}

impl HttpRuleCheckService {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::with_client(Client::builder().build()?, &config.endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RuleCheckService for HttpRuleCheckService {
    fn name(&self) -> &str {
        "http"
    }

    async fn check(&self, request: &CheckRequest) -> Result<CheckResultsResponse> {
        let form = request.to_multipart()?;

        debug!(
            "POST {} ({} bytes, {} rules)",
            self.endpoint,
            request.document.bytes.len(),
            request.rules.len()
        );

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RuleCheckError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
