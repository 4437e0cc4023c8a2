//! Configuration for the resume tailoring client
//!
//! The only external setting is the backend base URL. Its absence is
//! surfaced as a distinct configuration error before any network call
//! is attempted, never as a connection failure.

use crate::error::{Result, TailorError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable consulted by [`TailorConfig::from_env`].
pub const BACKEND_URL_ENV: &str = "RESUME_TAILOR_BACKEND_URL";

/// Backend service location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(alias = "url")] // accept both 'base_url' and 'url'
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL with any trailing slash removed, so endpoint joining
    /// via `format!("{}/upload", ...)` is uniform.
    pub fn endpoint_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(TailorError::ConfigurationMissing(format!(
                "set {} or provide a config file with backend.base_url",
                BACKEND_URL_ENV
            )));
        }
        Ok(())
    }
}

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailorConfig {
    pub backend: BackendConfig,
}

impl TailorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TailorError::ConfigurationMissing(format!("failed to read config file: {}", e))
        })?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TailorConfig = serde_json::from_str(json).map_err(|e| {
            TailorError::ConfigurationMissing(format!("failed to parse config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BACKEND_URL_ENV).unwrap_or_default();
        let config = Self {
            backend: BackendConfig::new(base_url),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.backend.validate()
    }
}
