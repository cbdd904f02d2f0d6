//! Unified path management for Amora configuration files.
//!
//! All configuration and secrets live under the platform config directory.
//! This keeps path resolution consistent across every storage in the app.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home/config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Amora.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/amora/             # Config directory
/// ├── config.toml              # Application configuration (model names)
/// ├── secret.json              # Gemini API key
/// └── logs/                    # Application logs
///     └── amora-desktop.log.YYYY-MM-DD
/// ```
pub struct AmoraPaths;

impl AmoraPaths {
    /// Returns the Amora configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("amora"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to secret.json.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_the_config_dir() {
        // dirs::config_dir is always available on the platforms we build for
        let config_dir = AmoraPaths::config_dir().unwrap();

        assert!(AmoraPaths::secret_file().unwrap().starts_with(&config_dir));
        assert!(AmoraPaths::config_file().unwrap().starts_with(&config_dir));
        assert!(AmoraPaths::logs_dir().unwrap().starts_with(&config_dir));
        assert!(config_dir.ends_with("amora"));
    }
}
