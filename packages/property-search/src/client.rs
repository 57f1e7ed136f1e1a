//! Extraction-service client.
//!
//! One POST per invocation against the provider's extract endpoint. No
//! retry, no polling, no partial-result assembly; every call is metered and
//! the caller pays its full latency.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::SecretString;
use crate::error::{ExtractError, ExtractResult};
use crate::request::ExtractionRequest;

const FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev/v1";

/// Capability interface for the external extraction service.
///
/// Implementations run one extraction over `request.urls`, steered by the
/// prompt and schema. Transport failures surface as [`ExtractError::Http`];
/// an unsuccessful envelope is still returned as data, for the interpreter
/// to recover from.
#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    async fn extract(&self, request: &ExtractionRequest) -> ExtractResult<ExtractResponse>;

    /// Provider name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Response envelope from the extraction service.
///
/// The payload conforms to the requested schema on a best-effort basis only
/// and is delivered as a loose mapping. Consumed immediately after the
/// call; never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    /// Whether the provider considers the extraction successful.
    pub success: bool,

    /// Schema-shaped payload.
    #[serde(default)]
    pub data: serde_json::Value,

    /// Provider status string.
    #[serde(default)]
    pub status: String,

    /// When the provider will discard the result.
    #[serde(rename = "expiresAt", default)]
    pub expires_at: String,
}

/// Firecrawl implementation of [`ExtractionProvider`].
pub struct FirecrawlExtractor {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl FirecrawlExtractor {
    /// Create a new extractor with the given API key.
    pub fn new(api_key: impl Into<SecretString>) -> ExtractResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ExtractError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: FIRECRAWL_API_URL.to_string(),
        })
    }

    /// Point the extractor at a different endpoint (self-hosted provider).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ExtractionProvider for FirecrawlExtractor {
    async fn extract(&self, request: &ExtractionRequest) -> ExtractResult<ExtractResponse> {
        tracing::info!(
            urls = request.urls.len(),
            provider = self.name(),
            "Starting extraction call"
        );

        let url = format!("{}/extract", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ExtractError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ExtractError::Http(
                format!("extraction API error: {status} - {text}").into(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::Http(Box::new(e)))?;

        let envelope: ExtractResponse =
            serde_json::from_str(&body).map_err(ExtractError::InvalidEnvelope)?;

        tracing::info!(
            success = envelope.success,
            status = %envelope.status,
            "Extraction call completed"
        );

        Ok(envelope)
    }

    fn name(&self) -> &str {
        "firecrawl"
    }
}
