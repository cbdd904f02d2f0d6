//! Error type for the Gemini API boundary.

use thiserror::Error;

/// Errors produced by the Gemini API boundary.
///
/// Callers decide the failure policy per path: the chat service converts
/// every variant into a safe fallback string, while the gallery propagates
/// them to the UI.
#[derive(Error, Debug, Clone)]
pub enum GeminiError {
    /// No API key is configured in the secret store or environment.
    #[error("Gemini API key is not configured")]
    MissingCredential,

    /// The prompt was empty after trimming; no request was issued.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The request never produced an HTTP response.
    #[error("Gemini API request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse Gemini response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
