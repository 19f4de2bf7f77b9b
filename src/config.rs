/// Application configuration
///
/// Loaded once at startup from a TOML file in the user's config directory:
/// - Linux: ~/.config/meme-gallery/config.toml
/// - macOS: ~/Library/Application Support/meme-gallery/config.toml
/// - Windows: %APPDATA%\meme-gallery\config.toml
///
/// A missing file means defaults. A malformed file is reported to the caller,
/// which logs it and falls back to defaults as well.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{GalleryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record endpoint URL. When unset the bundled catalog is used.
    pub endpoint: Option<String>,

    /// Timeout for record and image requests, in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Log filter used when `RUST_LOG` is not set. Default: `"info"`
    pub log_level: String,

    pub theme: ThemeChoice,

    /// chrono format string for upload dates in the modal. Default: `%-m/%-d/%Y`
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: 10,
            log_level: "info".to_string(),
            theme: ThemeChoice::default(),
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("meme-gallery");
        path.push("config.toml");
        Some(path)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| GalleryError::Config(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
