//! Per-configuration session agent.
//!
//! One agent serves one [`SessionConfig`]: it owns one extraction client
//! and one chat-model binding, and exposes the two public search
//! operations. Picking a different model means building a replacement
//! agent, never mutating this one.

use rig::agent::Agent;
use rig::providers::openai;

use crate::client::{ExtractionProvider, FirecrawlExtractor};
use crate::config::SessionConfig;
use crate::error::ExtractResult;
use crate::interpret::render_properties;
use crate::request::{search_request, trend_request, SearchCriteria};
use crate::trends::summarize_trends;

/// Preamble for the analysis model behind the extraction capability.
const ANALYST_PREAMBLE: &str =
    "I am a real estate expert who helps find and analyze properties based on user preferences.";

/// Orchestrator for property search against one session configuration.
///
/// Generic over the extraction provider so tests can substitute a mock:
/// - Production: `SearchAgent<FirecrawlExtractor>` via [`SearchAgent::new`]
/// - Testing: `SearchAgent<MockExtractor>` via [`SearchAgent::with_provider`]
///
/// Operations are stateless with respect to prior calls; the caller is
/// responsible for serializing them. Overlapping calls on one agent are
/// unsupported.
pub struct SearchAgent<P: ExtractionProvider> {
    config: SessionConfig,
    provider: P,
    analyst: Agent<openai::CompletionModel>,
}

impl SearchAgent<FirecrawlExtractor> {
    /// Create a production agent from a session configuration.
    pub fn new(config: SessionConfig) -> ExtractResult<Self> {
        let provider = FirecrawlExtractor::new(config.firecrawl_api_key.clone())?;
        Ok(Self::with_provider(config, provider))
    }
}

impl<P: ExtractionProvider> SearchAgent<P> {
    /// Create an agent with a caller-supplied extraction provider.
    pub fn with_provider(config: SessionConfig, provider: P) -> Self {
        let analyst = openai::Client::new(config.openai_api_key.expose())
            .agent(config.model.as_str())
            .preamble(ANALYST_PREAMBLE)
            .build();

        Self {
            config,
            provider,
            analyst,
        }
    }

    /// The session configuration this agent serves.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The chat-model binding backing the analysis capability.
    ///
    /// Not called on the formatting path; the extraction prompt carries the
    /// analysis instructions to the provider.
    pub fn analyst(&self) -> &Agent<openai::CompletionModel> {
        &self.analyst
    }

    /// Replace the configuration wholesale.
    ///
    /// Consumes this agent and returns a fresh production agent; client and
    /// model binding are rebuilt, nothing is reconfigured in place.
    pub fn reconfigure(
        self,
        config: SessionConfig,
    ) -> ExtractResult<SearchAgent<FirecrawlExtractor>> {
        SearchAgent::new(config)
    }

    /// Search the listing sources and render the digest.
    ///
    /// One metered provider round trip per call. Returns the fixed no-data
    /// message when the provider yields nothing usable.
    pub async fn find_properties(&self, criteria: &SearchCriteria) -> ExtractResult<String> {
        tracing::info!(
            city = %criteria.city,
            max_price_crores = criteria.max_price_crores,
            category = %criteria.category,
            property_type = %criteria.property_type,
            provider = self.provider.name(),
            "Searching properties"
        );

        let request = search_request(criteria);
        let response = self.provider.extract(&request).await?;
        render_properties(&response)
    }

    /// Fetch locality price trends for a city and summarize them.
    ///
    /// One metered provider round trip per call; the summary text is the
    /// fixed placeholder for now (see [`crate::trends`]).
    pub async fn get_location_trends(&self, city: &str) -> ExtractResult<String> {
        tracing::info!(
            city = %city,
            provider = self.provider.name(),
            "Fetching location trends"
        );

        let request = trend_request(city);
        let response = self.provider.extract(&request).await?;
        Ok(summarize_trends(&response))
    }
}
