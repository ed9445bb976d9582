//! User settings persistence.
//!
//! Stores user settings in the platform-specific config directory:
//! - Linux: ~/.config/courier/settings.json
//! - macOS: ~/Library/Application Support/courier/settings.json
//! - Windows: %APPDATA%/courier/settings.json

use std::path::{Path, PathBuf};

use courier_domain::Settings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Environment variable overriding the persisted log filter.
pub const LOG_ENV_VAR: &str = "COURIER_LOG";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for user settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("courier").join("settings.json")),
        }
    }

    /// Creates a repository backed by an explicit file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the path where settings are stored, if available.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads user settings from disk.
    ///
    /// Returns default settings if the file doesn't exist. A set
    /// `COURIER_LOG` replaces the stored log filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.path {
            Some(path) if fs::try_exists(path).await? => {
                let content = fs::read(path).await?;
                from_json_bytes(&content)?
            }
            _ => {
                tracing::debug!(path = ?self.path, "no settings file, using defaults");
                Settings::default()
            }
        };

        if let Ok(filter) = std::env::var(LOG_ENV_VAR)
            && !filter.trim().is_empty()
        {
            settings.log_filter = filter;
        }
        Ok(settings)
    }

    /// Saves user settings to disk, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory is known or the write fails.
    pub async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let path = self.path.as_deref().ok_or(SettingsError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
