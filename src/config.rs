//! Configuration Management
//!
//! Handles persistent client configuration: the API endpoint and the
//! organization/space the user is targeting.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API endpoint of the targeted platform
    #[serde(default)]
    pub api_url: Option<String>,
    /// Targeted organization id
    #[serde(default)]
    pub organization: Option<String>,
    /// Targeted space id
    #[serde(default)]
    pub space: Option<String>,
}

/// Validate an API endpoint before using it
fn valid_api_url(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if url.scheme() == "http" || url.scheme() == "https")
}

/// Read the API endpoint from the environment
/// Validates the URL format before returning
fn env_api_url() -> Option<String> {
    if let Ok(value) = std::env::var("NIMBUS_API") {
        if valid_api_url(&value) {
            return Some(value);
        }
        tracing::warn!("Invalid URL in NIMBUS_API");
    }
    None
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("NIMBUS_HOME") {
            return Some(PathBuf::from(home).join("config.json"));
        }
        dirs::config_dir().map(|p| p.join("nimbus").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        std::fs::write(&path, content).map_err(io_error)?;

        Ok(())
    }

    /// Get effective API endpoint (env > config)
    pub fn effective_api_url(&self) -> Option<String> {
        env_api_url()
            .or_else(|| self.api_url.clone().filter(|u| valid_api_url(u)))
    }

    /// Get effective organization (env > config)
    pub fn effective_organization(&self) -> Option<String> {
        std::env::var("NIMBUS_ORG").ok().or_else(|| self.organization.clone())
    }

    /// Get effective space (env > config)
    pub fn effective_space(&self) -> Option<String> {
        std::env::var("NIMBUS_SPACE").ok().or_else(|| self.space.clone())
    }

    /// Set API endpoint and save
    pub fn set_api_url(&mut self, api_url: &str) -> Result<()> {
        self.api_url = Some(api_url.to_string());
        self.save()
    }

    /// Set targeted organization and space and save
    pub fn set_target(&mut self, organization: &str, space: &str) -> Result<()> {
        self.organization = Some(organization.to_string());
        self.space = Some(space.to_string());
        self.save()
    }
}

fn io_error(error: std::io::Error) -> crate::Error {
    crate::Error::Config(error)
}
