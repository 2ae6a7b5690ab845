//! Application settings and configuration types.
//!
//! Settings are persisted to `~/.config/meeting-scheduler/settings.json` (or
//! XDG equivalent) and loaded at application startup. A missing file means
//! default settings.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::DEFAULT_ACCOUNT_TYPE;
use crate::services::GMAIL_DOMAIN;

const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No config directory could be determined for this platform.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Account selection settings.
    pub accounts: AccountSettings,
    /// Attendee listing settings.
    pub attendees: AttendeeSettings,
    /// Log output settings.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Returns the default settings file location.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "meeting-scheduler", "meeting-scheduler")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Loads settings from the default location.
    pub async fn load() -> SettingsResult<Self> {
        Self::load_from(&Self::default_path()?).await
    }

    /// Saves settings to the default location.
    pub async fn save(&self) -> SettingsResult<()> {
        self.save_to(&Self::default_path()?).await
    }

    /// Loads settings from `path`, falling back to defaults if it doesn't exist.
    pub async fn load_from(path: &Path) -> SettingsResult<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                tracing::debug!("Loaded settings from {}", path.display());
                Ok(serde_json::from_str(&content)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub async fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

/// Account selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Account type to list, e.g. `com.google`.
    pub account_type: String,
    /// Account chosen in a previous run, used as the selection hint.
    pub last_account: Option<String>,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
            last_account: None,
        }
    }
}

/// Attendee listing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendeeSettings {
    /// Domain preferred when no address shares the account's domain.
    pub fallback_domain: String,
    /// Whether contacts outside the visible groups are proposed too.
    pub include_hidden_contacts: bool,
}

impl Default for AttendeeSettings {
    fn default() -> Self {
        Self {
            fallback_domain: GMAIL_DOMAIN.to_string(),
            include_hidden_contacts: false,
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
