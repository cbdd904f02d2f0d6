//! Secret configuration domain model and service trait.
//!
//! API credentials live outside the session state, in an ambient secret
//! store (environment variable or `secret.json`). Implementations must
//! re-read the underlying source on every load so credential changes are
//! observed by the next call.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Gemini credential block inside the secret configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// Root secret configuration (secret.json).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiSecret>,
}

/// Service for loading and storing secret configuration.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration from the underlying source.
    ///
    /// Must not cache: callers rely on observing credential changes made
    /// between invocations.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Stores the Gemini API key.
    async fn store_api_key(&self, api_key: String) -> Result<()>;

    /// Resolves the Gemini API key, if one is configured.
    async fn api_key(&self) -> Option<String> {
        self.load_secrets()
            .await
            .ok()
            .and_then(|config| config.gemini)
            .map(|gemini| gemini.api_key)
            .filter(|key| !key.is_empty())
    }

    /// Whether a usable API key is currently configured.
    async fn has_api_key(&self) -> bool {
        self.api_key().await.is_some()
    }
}
