use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::media::normalize::NormalizeOptions;

/// Largest side of an uploaded image, in pixels
pub const DEFAULT_MAX_DIMENSION: u32 = 1600;

/// JPEG quality for uploads (0.85 on a 0-1 scale)
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Editor configuration
///
/// Stored as TOML in the user's config directory:
/// - Linux: ~/.config/portfolio-editor/config.toml
/// - macOS: ~/Library/Application Support/portfolio-editor/config.toml
/// - Windows: %APPDATA%\portfolio-editor\config.toml
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// GET lists projects, POST upserts one
    pub projects_endpoint: String,
    /// POST takes a data URI and answers with the stored URL
    pub upload_endpoint: String,
    pub max_dimension: u32,
    pub jpeg_quality: u8,
    /// Upper bound on decoding a selected file
    pub decode_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_endpoint: "http://localhost:8080/projects".to_string(),
            upload_endpoint: "http://localhost:8080/upload-image".to_string(),
            max_dimension: DEFAULT_MAX_DIMENSION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            decode_timeout_secs: 30,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load the config from the default location, falling back to defaults
    /// when the file does not exist yet
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the path where the config file should live
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("portfolio-editor");
        path.push("config.toml");
        Some(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.projects_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("projects_endpoint is empty".into()));
        }
        if self.upload_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("upload_endpoint is empty".into()));
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid("max_dimension must be positive".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpeg_quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if self.decode_timeout_secs == 0 {
            return Err(ConfigError::Invalid("decode_timeout_secs must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            max_dimension: self.max_dimension,
            quality: self.jpeg_quality,
            decode_timeout: Duration::from_secs(self.decode_timeout_secs),
        }
    }
}
