//! Reasoning engine port
//!
//! The routing decisions are delegated to an external language model. The
//! port is a single call: prompt text in, raw completion text out. Parsing
//! the completion into a decision happens in the domain layer, so the loop
//! can apply its re-prompt policy to malformed turns and test doubles can
//! script malformed turns in the first place.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the reasoning engine transport.
///
/// These are the only errors that propagate out of the orchestration loop
/// as structured failures; everything tool-related is absorbed into
/// sentinel replies.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

/// One reasoning turn, delegated to an external model.
///
/// Non-deterministic across calls unless the adapter is configured for
/// deterministic sampling.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Produce the next turn's text for the given prompt.
    async fn decide(&self, prompt: &str) -> Result<String, EngineError>;
}
