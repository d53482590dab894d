//! Client for the external text-generation service used by the project
//! summary.
//!
//! [`TextGenerator`] is the seam handlers depend on; [`gemini::GeminiClient`]
//! implements it against the Gemini `generateContent` REST endpoint.

pub mod gemini;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};

/// Errors from the text-generation layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// No API key was configured.
    #[error("Text generator not configured: {0}")]
    NotConfigured(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Text generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered but produced no text.
    #[error("Text generation returned no content")]
    EmptyResponse,
}

/// Prompt in, completion out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}
