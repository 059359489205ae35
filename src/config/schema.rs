//! Configuration schema types
//!
//! This module defines the configuration structure for the order-test viewer.

use serde::{Deserialize, Serialize};

/// Default order-test endpoint
pub const DEFAULT_BASE_URL: &str =
    "https://biostatistics.salud.pr.gov/orders/tests/covid-19/minimal";

/// Main viewer configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Order-test endpoint settings
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Pagination behaviour
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ViewerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.endpoint.validate()?;
        self.pagination.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Order-test endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL the range query parameters are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// Unset by default: a slow request stays pending until it settles.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl EndpointConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("endpoint.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("endpoint.base_url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("endpoint.base_url is not a valid URL: {e}"))?;

        if self.timeout_seconds == Some(0) {
            return Err("endpoint.timeout_seconds must be > 0 when set".to_string());
        }

        Ok(())
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

/// Pagination configuration
///
/// The page size itself is fixed; these settings only shape navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Return to the first page whenever a new record set arrives
    #[serde(default)]
    pub reset_on_new_data: bool,

    /// Pages always shown at each end of the page controls
    #[serde(default = "default_margin_pages")]
    pub margin_pages: usize,

    /// Pages shown in the window around the current page
    #[serde(default = "default_page_range")]
    pub page_range: usize,
}

impl PaginationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_range == 0 {
            return Err("pagination.page_range must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            reset_on_new_data: false,
            margin_pages: default_margin_pages(),
            page_range: default_page_range(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_margin_pages() -> usize {
    2
}

fn default_page_range() -> usize {
    5
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pagination.margin_pages, 2);
        assert_eq!(config.pagination.page_range, 5);
        assert!(!config.pagination.reset_on_new_data);
        assert!(config.endpoint.timeout_seconds.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ViewerConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.logging.local_rotation, "daily");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = ViewerConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_base_url_requires_http_scheme() {
        let mut config = ViewerConfig::default();
        config.endpoint.base_url = "ftp://example.com/orders".to_string();
        assert!(config.validate().is_err());

        config.endpoint.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ViewerConfig::default();
        config.endpoint.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_range_rejected() {
        let mut config = ViewerConfig::default();
        config.pagination.page_range = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = ViewerConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
