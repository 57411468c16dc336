//! User settings - API location, token and gesture thresholds.
//!
//! Stored as JSON at `<config dir>/heartrate/settings.json`. A missing file
//! means defaults; an unreadable or invalid one is logged and replaced by
//! defaults so the app still starts.

use crate::constants::DEFAULT_API_BASE_URL;
use crate::gesture::{ConfigError, ThresholdConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for this schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Thresholds violate their ordering rules
    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_base_url: String,
    /// Bearer token issued by the sign-in flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    pub thresholds: ThresholdConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            thresholds: ThresholdConfig::default(),
        }
    }
}

/// Location of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("heartrate").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            tracing::warn!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a settings file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.thresholds.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
