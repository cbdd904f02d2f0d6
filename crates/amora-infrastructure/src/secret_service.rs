//! Secret service implementation.
//!
//! Resolves the Gemini API key from the environment (`GEMINI_API_KEY` or
//! `API_KEY`) with secret.json as the fallback. Loads are intentionally
//! uncached: the image-generation path constructs a client per call and
//! must observe credential changes made between calls.

use amora_core::AmoraError;
use amora_core::secret::{GeminiSecret, SecretConfig, SecretService};
use async_trait::async_trait;

use crate::secret_storage::{SecretStorage, SecretStorageError};

/// Environment variables that override secret.json, in precedence order.
const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// [`SecretService`] backed by the environment and secret.json.
pub struct SecretServiceImpl {
    storage: SecretStorage,
}

impl SecretServiceImpl {
    pub fn new() -> Result<Self, AmoraError> {
        let storage = SecretStorage::new().map_err(storage_error)?;
        Ok(Self { storage })
    }

    /// Creates a service over an explicit storage (for testing).
    pub fn with_storage(storage: SecretStorage) -> Self {
        Self { storage }
    }

    /// Returns the path of the backing secret file.
    pub fn secret_path(&self) -> &std::path::PathBuf {
        self.storage.path()
    }

    fn env_api_key() -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty())
    }
}

#[async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, AmoraError> {
        if let Some(api_key) = Self::env_api_key() {
            return Ok(SecretConfig {
                gemini: Some(GeminiSecret {
                    api_key,
                    model_name: None,
                }),
            });
        }

        match self.storage.load() {
            Ok(config) => Ok(config),
            // A missing file simply means nothing is configured yet.
            Err(SecretStorageError::NotFound(_)) => Ok(SecretConfig::default()),
            Err(err) => Err(storage_error(err)),
        }
    }

    async fn store_api_key(&self, api_key: String) -> Result<(), AmoraError> {
        let mut config = match self.storage.load() {
            Ok(config) => config,
            Err(SecretStorageError::NotFound(_)) => SecretConfig::default(),
            Err(err) => return Err(storage_error(err)),
        };

        let model_name = config.gemini.take().and_then(|gemini| gemini.model_name);
        config.gemini = Some(GeminiSecret {
            api_key,
            model_name,
        });

        self.storage.save(&config).map_err(storage_error)?;
        tracing::info!(path = %self.storage.path().display(), "stored API key");

        Ok(())
    }
}

fn storage_error(err: SecretStorageError) -> AmoraError {
    match err {
        SecretStorageError::NotFound(path) => {
            AmoraError::not_found("secret file", path.display().to_string())
        }
        SecretStorageError::IoError(e) => AmoraError::io(e.to_string()),
        SecretStorageError::ParseError(e) => e.into(),
        SecretStorageError::ConfigDirNotFound => {
            AmoraError::config("could not determine configuration directory")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(temp_dir: &TempDir) -> SecretServiceImpl {
        SecretServiceImpl::with_storage(SecretStorage::with_path(
            temp_dir.path().join("secret.json"),
        ))
    }

    #[tokio::test]
    async fn test_missing_file_means_no_key() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        // Environment overrides would mask this assertion when set.
        if SecretServiceImpl::env_api_key().is_none() {
            assert!(!service.has_api_key().await);
            assert_eq!(service.api_key().await, None);
        }
    }

    #[tokio::test]
    async fn test_store_then_load_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        service.store_api_key("fresh-key".to_string()).await.unwrap();

        let config = service.storage.load().unwrap();
        assert_eq!(config.gemini.unwrap().api_key, "fresh-key");
    }

    #[tokio::test]
    async fn test_store_preserves_model_name() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        service
            .storage
            .save(&SecretConfig {
                gemini: Some(GeminiSecret {
                    api_key: "old".to_string(),
                    model_name: Some("gemini-pro".to_string()),
                }),
            })
            .unwrap();

        service.store_api_key("new".to_string()).await.unwrap();

        let gemini = service.storage.load().unwrap().gemini.unwrap();
        assert_eq!(gemini.api_key, "new");
        assert_eq!(gemini.model_name, Some("gemini-pro".to_string()));
    }

    #[tokio::test]
    async fn test_loads_are_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let service = service_in(&temp_dir);

        service.store_api_key("first".to_string()).await.unwrap();
        service.store_api_key("second".to_string()).await.unwrap();

        if SecretServiceImpl::env_api_key().is_none() {
            // The second read reflects the change made after the first.
            assert_eq!(service.api_key().await, Some("second".to_string()));
        }
    }
}
