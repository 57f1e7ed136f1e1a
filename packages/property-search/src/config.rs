//! Session configuration: chat-model choice and service credentials.
//!
//! Credentials use the `secrecy` crate so API keys never show up in `Debug`
//! output, logs, or error messages.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;
use std::str::FromStr;

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Wrap a credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this when actually using the secret (e.g., in an API
    /// request header).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Chat model backing the analysis side of the extraction capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelId {
    /// Default reasoning model.
    #[default]
    O3Mini,
    /// Fallback when o3-mini is unavailable.
    Gpt4o,
}

impl ModelId {
    /// Provider identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::O3Mini => "o3-mini",
            ModelId::Gpt4o => "gpt-4o",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o3-mini" => Ok(ModelId::O3Mini),
            "gpt-4o" => Ok(ModelId::Gpt4o),
            other => Err(format!("unknown model id: {other} (expected o3-mini or gpt-4o)")),
        }
    }
}

/// Per-session configuration owned by a search agent.
///
/// Lives for the duration of one configuration choice and is replaced
/// wholesale when the user picks a different model; there is no in-place
/// reconfiguration.
#[derive(Clone)]
pub struct SessionConfig {
    /// Chosen chat model.
    pub model: ModelId,

    /// OpenAI API key (secret).
    pub openai_api_key: SecretString,

    /// Firecrawl API key (secret).
    pub firecrawl_api_key: SecretString,
}

impl SessionConfig {
    /// Create a new session configuration.
    ///
    /// Both keys must be non-empty; the startup-fatal check for missing
    /// credentials belongs to the caller, before the session exists.
    pub fn new(
        model: ModelId,
        openai_api_key: impl Into<SecretString>,
        firecrawl_api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            model,
            openai_api_key: openai_api_key.into(),
            firecrawl_api_key: firecrawl_api_key.into(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("model", &self.model)
            .field("openai_api_key", &"[REDACTED]")
            .field("firecrawl_api_key", &"[REDACTED]")
            .finish()
    }
}
