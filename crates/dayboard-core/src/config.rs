use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Profile store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Page section toggles
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Override for the profile database path.
    /// Defaults to `<config_dir>/profile.db` when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. Weather is disabled when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Weather API base URL
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    /// IP geolocation endpoint used when no coordinates are configured
    #[serde(default = "default_locate_endpoint")]
    pub locate_endpoint: String,

    /// Fixed latitude; skips IP geolocation when paired with `longitude`
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Fixed longitude; skips IP geolocation when paired with `latitude`
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_weather_endpoint() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_locate_endpoint() -> String {
    "https://ipapi.co/json/".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_weather_endpoint(),
            locate_endpoint: default_locate_endpoint(),
            latitude: None,
            longitude: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the daily quote section
    #[serde(default = "default_true")]
    pub show_quote: bool,

    /// Show the weather section
    #[serde(default = "default_true")]
    pub show_weather: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_quote: true,
            show_weather: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dayboard");

        Self {
            config_dir,
            store: StoreConfig::default(),
            weather: WeatherConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.endpoint, "weather.endpoint", &mut result);
        self.validate_url(
            &self.weather.locate_endpoint,
            "weather.locate_endpoint",
            &mut result,
        );

        // Coordinates must come as a pair
        match (self.weather.latitude, self.weather.longitude) {
            (Some(_), None) => {
                result.add_error("weather.longitude", "Latitude set without longitude");
            }
            (None, Some(_)) => {
                result.add_error("weather.latitude", "Longitude set without latitude");
            }
            _ => {}
        }

        if let Some(lat) = self.weather.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                result.add_error("weather.latitude", "Latitude must be within -90..90");
            }
        }
        if let Some(lon) = self.weather.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                result.add_error("weather.longitude", "Longitude must be within -180..180");
            }
        }

        // Missing API key just disables the weather section
        if self.ui.show_weather && self.weather.api_key.is_none() {
            result.add_warning(
                "weather.api_key",
                "No API key configured - weather section will be disabled",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the durable profile store database
    pub fn profile_db_path(&self) -> PathBuf {
        match &self.store.path {
            Some(path) => PathBuf::from(path),
            None => self.config_dir.join("profile.db"),
        }
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("dayboard");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let mut config = Config::default();
        config.weather.endpoint = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.endpoint"));
    }

    #[test]
    fn test_invalid_endpoint_scheme() {
        let mut config = Config::default();
        config.weather.locate_endpoint = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_unpaired_coordinates() {
        let mut config = Config::default();
        config.weather.latitude = Some(47.6);
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.longitude"));
    }

    #[test]
    fn test_out_of_range_latitude() {
        let mut config = Config::default();
        config.weather.latitude = Some(123.0);
        config.weather.longitude = Some(10.0);
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.latitude"));
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
    }

    #[test]
    fn test_profile_db_path_default_and_override() {
        let mut config = Config::default();
        assert_eq!(config.profile_db_path(), config.config_dir.join("profile.db"));

        config.store.path = Some("/tmp/custom.db".to_string());
        assert_eq!(config.profile_db_path(), PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.weather.endpoint, config.weather.endpoint);
        assert_eq!(parsed.ui.show_quote, config.ui.show_quote);
    }
}
