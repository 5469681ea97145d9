//! Configuration loading for the storefront client.
//!
//! All fields are required. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Directory holding `products.json`, `data.json`, `blog.json`, `services.json`.
    pub data_dir: PathBuf,
    /// JSON file backing the session storage.
    pub session_path: PathBuf,
    pub inquiry_endpoint: String,
    pub request_timeout_ms: u64,
    /// Sent as `meta.page` with every inquiry.
    pub page_url: String,
    pub listing_page_size: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or STOREFRONT_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ClientConfig {
    /// Load from `path`, or from `STOREFRONT_CONFIG` when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(config_path_from_env)
            .ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_dir",
                reason: "must not be empty".to_string(),
            });
        }
        if self.session_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session_path",
                reason: "must not be empty".to_string(),
            });
        }
        let endpoint = self.inquiry_endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "inquiry_endpoint",
                reason: "must be an http:// or https:// URL".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.page_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "page_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.listing_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing_page_size",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
data_dir = "data"
session_path = "session/cart.json"
inquiry_endpoint = "http://localhost:8080/api/send-inquiry"
request_timeout_ms = 5000
page_url = "https://example.com/html/cart.html"
listing_page_size = 12
"#;

    #[test]
    fn test_parses_valid_config() {
        let config = ClientConfig::from_toml(VALID).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.listing_page_size, 12);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let raw = format!("{VALID}\ntheme = \"dark\"\n");
        assert!(matches!(
            ClientConfig::from_toml(&raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(ClientConfig::from_toml("data_dir = \"data\"").is_err());
    }

    #[test]
    fn test_load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, VALID).unwrap();
        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.request_timeout_ms, 5000);
    }
}
