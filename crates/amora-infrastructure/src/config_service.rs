//! Application configuration (config.toml).
//!
//! Holds the model identifiers the AI boundary should target. Every field
//! is optional; the desktop shell falls back to the interaction crate's
//! defaults when a field is absent, so a missing or empty file is valid.

use std::fs;
use std::path::PathBuf;

use amora_core::AmoraError;
use serde::{Deserialize, Serialize};

use crate::paths::AmoraPaths;

/// Application configuration loaded from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model for matchmaking conversations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_model: Option<String>,
    /// Model for portrait generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model: Option<String>,
}

/// Loads the application configuration from the config directory.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new() -> Result<Self, AmoraError> {
        let path = AmoraPaths::config_file()
            .map_err(|e| AmoraError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a service over an explicit path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads config.toml, returning defaults when the file is absent.
    pub fn load(&self) -> Result<AppConfig, AmoraError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "chat_model = \"gemini-3-pro-preview\"\n").unwrap();

        let config = ConfigService::with_path(path).load().unwrap();

        assert_eq!(config.chat_model, Some("gemini-3-pro-preview".to_string()));
        assert_eq!(config.image_model, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "chat_model = [not toml").unwrap();

        assert!(ConfigService::with_path(path).load().is_err());
    }
}
