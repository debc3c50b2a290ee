//! Current-weather client for the OpenWeatherMap API.

use crate::types::{CurrentWeather, Location, WeatherError};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    weather: Vec<ApiCondition>,
    main: ApiMain,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(DEFAULT_API_URL, api_key)
    }

    /// Create a provider against a custom base URL (used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions at `location` in metric units.
    pub async fn fetch(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, location.latitude, location.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API returned {}: {}", status, message);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ApiResponse = response.json().await?;
        to_current_weather(body, location)
    }
}

fn to_current_weather(
    body: ApiResponse,
    location: &Location,
) -> Result<CurrentWeather, WeatherError> {
    let condition = body
        .weather
        .first()
        .map(|w| w.main.clone())
        .ok_or_else(|| WeatherError::Parse("response had no weather conditions".to_string()))?;

    // Prefer the API's place name, falling back to the locator's
    let city = if body.name.is_empty() {
        location.city.clone().unwrap_or_default()
    } else {
        body.name
    };

    Ok(CurrentWeather {
        condition,
        temperature_c: body.main.temp,
        city,
        fetched_at: Utc::now(),
    })
}
