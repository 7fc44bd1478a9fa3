//! Provider configuration.
//!
//! Loaded from a TOML file, then optionally overridden from the
//! environment:
//! - `KUNDALI_PROVIDER_URL` replaces `base_url`
//! - `KUNDALI_PROVIDER_KEY` replaces `api_key`
//!
//! ```toml
//! base_url = "https://ephem.example.com"
//! core_path = "/core"
//! api_key = "secret"
//! timeout_secs = 20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding `base_url`.
pub const ENV_PROVIDER_URL: &str = "KUNDALI_PROVIDER_URL";
/// Environment variable overriding `api_key`.
pub const ENV_PROVIDER_KEY: &str = "KUNDALI_PROVIDER_KEY";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

fn default_core_path() -> String {
    "/core".to_string()
}

fn default_user_agent() -> String {
    concat!("kundali-charts/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Settings for [`HttpProvider`](crate::provider::HttpProvider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Scheme and host of the ephemeris service.
    pub base_url: String,
    /// Path of the core longitudes endpoint.
    #[serde(default = "default_core_path")]
    pub core_path: String,
    /// Bearer token, if the service requires one.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Defaults for everything but the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            core_path: default_core_path(),
            api_key: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Parse and validate TOML text. `path` is only used in error messages.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, then re-validate.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_PROVIDER_URL).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(key) = lookup(ENV_PROVIDER_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check URL scheme and timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue("base_url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(format!(
                "base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// `base_url` joined with `core_path`, with exactly one slash between.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.core_path.trim_start_matches('/')
        )
    }
}
