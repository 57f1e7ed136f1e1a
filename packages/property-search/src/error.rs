//! Typed errors for the extraction orchestration layer.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! "provider unreachable" apart from "malformed payload" without string
//! matching.

use thiserror::Error;

/// Errors that can occur while calling the extraction service or
/// interpreting its payload.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Transport-level failure: connection error, timeout, or non-2xx status.
    #[error("extraction HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The provider answered 2xx but the body is not the expected envelope.
    #[error("invalid extraction envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// The envelope carried a payload that does not validate against the
    /// requested schema (e.g. a record missing a required field).
    #[error("malformed extraction payload: {reason}")]
    MalformedPayload { reason: String },
}

/// Result type alias for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
