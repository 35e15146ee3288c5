/// Application configuration
///
/// Replaces the hard-coded endpoint with an injected value: the config
/// is loaded once at startup from a JSON file in the platform config
/// directory and handed to the loader and the view. A missing file
/// means defaults; a malformed file logs a warning and means defaults.

use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// How the view lays out the downloaded image
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Full-bleed: cover the whole window
    Fill,
    /// Centered fixed 200x200 box
    Fixed,
}

/// All startup configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Endpoint the image is downloaded from
    pub image_url: String,
    /// Timeout applied to the whole request, in seconds
    pub request_timeout_secs: u64,
    /// Layout of the downloaded image
    pub fit: FitMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_url: "https://picsum.photos/300".to_string(),
            request_timeout_secs: 30,
            fit: FitMode::Fill,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("Ignoring malformed config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            // No config file is the normal case
            Err(_) => Self::default(),
        }
    }

    /// Where the config file lives
    ///
    /// - Linux: ~/.config/picview/config.json
    /// - macOS: ~/Library/Application Support/picview/config.json
    /// - Windows: %APPDATA%\picview\config.json
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("picview");
        path.push("config.json");
        Some(path)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
