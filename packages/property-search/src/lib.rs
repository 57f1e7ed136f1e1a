//! LLM-guided real-estate search over a web-extraction service.
//!
//! Turns a structured search (city, budget, category, unit type) into a
//! schema-constrained call against an external extraction provider, then
//! validates the loosely-typed response and renders it into a stable text
//! digest. A second, differently-shaped call fetches locality price trends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use property_search::{ModelId, SearchAgent, SearchCriteria, SessionConfig};
//!
//! let config = SessionConfig::new(ModelId::O3Mini, openai_key, firecrawl_key);
//! let agent = SearchAgent::new(config)?;
//!
//! let digest = agent.find_properties(&SearchCriteria::new("Mumbai", 2.5)).await?;
//! let trends = agent.get_location_trends("Mumbai").await?;
//! ```
//!
//! # Modules
//!
//! - [`schema`] - typed payload shapes and provider schema descriptors
//! - [`request`] - search criteria and extraction-request construction
//! - [`client`] - the extraction capability trait and Firecrawl client
//! - [`interpret`] - payload validation and digest rendering
//! - [`trends`] - locality trend summary (placeholder output)
//! - [`agent`] - the per-configuration session agent
//! - [`config`] - session configuration and credential handling
//! - [`testing`] - mock provider for tests

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod interpret;
pub mod request;
pub mod schema;
pub mod testing;
pub mod trends;

// Re-export core types at crate root
pub use agent::SearchAgent;
pub use client::{ExtractResponse, ExtractionProvider, FirecrawlExtractor};
pub use config::{ModelId, SecretString, SessionConfig};
pub use error::{ExtractError, ExtractResult};
pub use interpret::{render_properties, NO_DATA_MESSAGE};
pub use request::{
    city_token, listing_urls, search_request, trend_request, trend_url, ExtractionRequest,
    PropertyCategory, PropertyType, SearchCriteria,
};
pub use schema::{
    schema_descriptor, LocationCollection, LocationTrend, PropertyCollection, PropertyRecord,
};
pub use testing::MockExtractor;
pub use trends::{summarize_trends, TREND_PLACEHOLDER};
