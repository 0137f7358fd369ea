use crate::domain::model::{FinalizationOutcome, Service, SuggestionResult, ValidInput};
use crate::domain::ports::{ConfigProvider, FinalizeSink, SuggestionBackend};
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wire shape of a suggestion request. The server speaks camelCase; the
/// mapping lives here so the domain model stays untouched.
#[derive(Serialize)]
struct SuggestionPayload<'a> {
    #[serde(rename = "clientInterest")]
    client_interest: &'a str,
    #[serde(rename = "vendorCapability")]
    vendor_capability: &'a str,
}

#[derive(Deserialize)]
struct SuggestionBody {
    services: Vec<Service>,
}

#[derive(Serialize)]
struct FinalizePayload<'a> {
    services: &'a [String],
}

/// Error bodies vary between the two collaborators: the suggestion
/// service reports under `error`, the finalize service under `message`.
#[derive(Deserialize)]
struct UpstreamBody {
    error: Option<String>,
    message: Option<String>,
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// HTTP adapter for the suggestion collaborator. The `reqwest::Client` is
/// injected by the caller so tests and embedders control the transport.
pub struct HttpSuggestionClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpSuggestionClient {
    pub fn new<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            url: join_url(config.base_url(), config.suggestions_path()),
            timeout: config.request_timeout(),
        }
    }
}

#[async_trait]
impl SuggestionBackend for HttpSuggestionClient {
    async fn request_suggestions(&self, input: &ValidInput) -> Result<SuggestionResult> {
        let payload = SuggestionPayload {
            client_interest: input.client_interest(),
            vendor_capability: input.vendor_capability(),
        };

        tracing::debug!(url = %self.url, "requesting suggestions");
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|source| MatchError::SuggestionTransportError { source })?;

        let status = response.status();
        tracing::debug!(%status, "suggestion response received");

        if !status.is_success() {
            let message = response
                .json::<UpstreamBody>()
                .await
                .ok()
                .and_then(|body| body.error.or(body.message))
                .unwrap_or_else(|| format!("suggestion service returned status {}", status));
            return Err(MatchError::UpstreamError { message });
        }

        let body: SuggestionBody = response.json().await.map_err(|e| MatchError::UpstreamError {
            message: format!("malformed suggestion payload: {}", e),
        })?;

        SuggestionResult::new(body.services)
    }
}

/// HTTP adapter for the finalize collaborator. Application-level
/// rejections come back as a failed outcome; only a missing response is
/// an error.
pub struct HttpFinalizeClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpFinalizeClient {
    pub fn new<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self {
            client,
            url: join_url(config.base_url(), config.finalize_path()),
            timeout: config.request_timeout(),
        }
    }
}

#[async_trait]
impl FinalizeSink for HttpFinalizeClient {
    async fn finalize(&self, titles: &[String]) -> Result<FinalizationOutcome> {
        if titles.is_empty() {
            return Err(MatchError::EmptyFinalizeError);
        }

        tracing::debug!(url = %self.url, count = titles.len(), "committing selection");
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&FinalizePayload { services: titles })
            .send()
            .await
            .map_err(|source| MatchError::FinalizeTransportError { source })?;

        let status = response.status();
        tracing::debug!(%status, "finalize response received");

        if !status.is_success() {
            let message = response
                .json::<UpstreamBody>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error))
                .unwrap_or_else(|| format!("finalize service returned status {}", status));
            return Ok(FinalizationOutcome {
                success: false,
                message,
            });
        }

        Ok(response
            .json::<FinalizationOutcome>()
            .await
            .unwrap_or_else(|e| FinalizationOutcome {
                success: false,
                message: format!("unrecognized finalize response: {}", e),
            }))
    }
}
