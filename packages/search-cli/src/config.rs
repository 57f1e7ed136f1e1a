use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Process credentials loaded from environment variables.
///
/// Both keys must be present and non-empty before any search can run; a
/// missing key is fatal at startup, before the agent exists.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub firecrawl_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let firecrawl_api_key =
            env::var("FIRECRAWL_API_KEY").context("FIRECRAWL_API_KEY must be set")?;

        if openai_api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY must not be empty");
        }
        if firecrawl_api_key.trim().is_empty() {
            anyhow::bail!("FIRECRAWL_API_KEY must not be empty");
        }

        Ok(Self {
            openai_api_key,
            firecrawl_api_key,
        })
    }
}
