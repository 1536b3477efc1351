// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard display settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::config("api.base_url is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::config("api.timeout_secs must be > 0"));
        }
        if self.ui.page_size == 0 {
            return Err(AppError::config("ui.page_size must be > 0"));
        }
        if self.ui.max_page_links == 0 {
            return Err(AppError::config("ui.max_page_links must be > 0"));
        }
        Ok(())
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the SCRS REST API, including the /api prefix
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Dashboard display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows requested per page
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// Quiet period before a search input triggers a reload, in milliseconds
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,

    /// Width of the numbered pagination window
    #[serde(default = "defaults::max_page_links")]
    pub max_page_links: u32,

    /// What to do with pagination controls when there is at most one page
    #[serde(default)]
    pub pagination_when_single: SinglePagePolicy,

    /// chrono format string for timestamps
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            debounce_ms: defaults::debounce_ms(),
            max_page_links: defaults::max_page_links(),
            pagination_when_single: SinglePagePolicy::default(),
            date_format: defaults::date_format(),
        }
    }
}

/// Pagination control visibility when `total_pages <= 1`.
///
/// The source dashboards disagreed on this, so it is a policy knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinglePagePolicy {
    /// Hide the controls entirely
    #[default]
    Hide,
    /// Render both controls disabled
    Disable,
}

/// Session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the persisted session file
    #[serde(default = "defaults::session_file")]
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: defaults::session_file(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "http://localhost:8080/api".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "scrs-client/1.0".into()
    }
    pub fn page_size() -> u32 {
        10
    }
    pub fn debounce_ms() -> u64 {
        300
    }
    pub fn max_page_links() -> u32 {
        5
    }
    pub fn date_format() -> String {
        "%b %d, %Y %H:%M".into()
    }
    pub fn session_file() -> String {
        "data/session.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.ui.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn single_page_policy_defaults_to_hide() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.pagination_when_single, SinglePagePolicy::Hide);
    }

    #[test]
    fn single_page_policy_parses_disable() {
        let config: Config =
            toml::from_str("[ui]\npagination_when_single = \"disable\"\n").unwrap();
        assert_eq!(config.ui.pagination_when_single, SinglePagePolicy::Disable);
    }
}
