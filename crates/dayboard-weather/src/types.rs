use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
}

/// Current weather conditions at one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Condition group reported by the API (e.g. "Clouds", "Rain")
    pub condition: String,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    /// Place name reported by the API
    pub city: String,
    pub fetched_at: DateTime<Utc>,
}

impl CurrentWeather {
    /// One-line condition summary
    pub fn summary(&self) -> String {
        format!("{} / {} degree", self.condition, self.temperature_c)
    }
}

/// Location lookup errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request failed: {0}")]
    Other(String),
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Weather API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Message suitable for display on the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network(_) => "Weather service unreachable. Please try again.",
            WeatherError::Location(_) => "can't find you",
            WeatherError::Api { status, .. } if *status == 401 => {
                "Weather API key was rejected. Check settings."
            }
            WeatherError::Api { .. } => "Weather service error. Please try again.",
            WeatherError::Parse(_) => "Weather data could not be read.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let weather = CurrentWeather {
            condition: "Clouds".to_string(),
            temperature_c: 21.3,
            city: "Seoul".to_string(),
            fetched_at: Utc::now(),
        };
        assert_eq!(weather.summary(), "Clouds / 21.3 degree");
    }

    #[test]
    fn test_location_failure_user_message() {
        let err = WeatherError::Location(LocationError::ServiceUnavailable);
        assert_eq!(err.user_message(), "can't find you");
    }

    #[test]
    fn test_rejected_key_user_message() {
        let err = WeatherError::Api { status: 401, message: "Invalid API key".into() };
        assert!(err.user_message().contains("API key"));
    }
}
