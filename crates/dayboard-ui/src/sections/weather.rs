use anyhow::Result;
use dayboard_core::{Section, SectionContext, WeatherConfig};
use dayboard_weather::{locate, CurrentWeather, Location, WeatherError, WeatherProvider};

/// Weather page section.
///
/// The fetch is the page's only network call: locate (unless coordinates
/// are configured), fetch, render. Errors become a single display line.
pub struct WeatherSection {
    config: WeatherConfig,
    status: WeatherStatus,
}

#[derive(Debug)]
enum WeatherStatus {
    /// No API key configured
    Disabled,
    /// Not fetched yet
    Pending,
    Ready(CurrentWeather),
    Failed(String),
}

impl WeatherSection {
    pub fn new(config: WeatherConfig) -> Self {
        let status = if config.api_key.is_some() {
            WeatherStatus::Pending
        } else {
            WeatherStatus::Disabled
        };
        Self { config, status }
    }

    /// Locate and fetch current conditions, updating the display status.
    pub async fn refresh(&mut self) {
        let api_key = match &self.config.api_key {
            Some(key) => key.clone(),
            None => {
                self.status = WeatherStatus::Disabled;
                return;
            }
        };

        let location = match (self.config.latitude, self.config.longitude) {
            (Some(latitude), Some(longitude)) => Location {
                latitude,
                longitude,
                city: None,
            },
            _ => match locate(&self.config.locate_endpoint).await {
                Ok(location) => location,
                Err(e) => {
                    tracing::warn!("Geolocation failed: {}", e);
                    self.status = WeatherStatus::Failed(
                        WeatherError::from(e).user_message().to_string(),
                    );
                    return;
                }
            },
        };

        let provider = match WeatherProvider::with_base_url(&self.config.endpoint, api_key) {
            Ok(provider) => provider,
            Err(e) => {
                self.status = WeatherStatus::Failed(e.user_message().to_string());
                return;
            }
        };

        match provider.fetch(&location).await {
            Ok(weather) => {
                tracing::info!("Weather for {}: {}", weather.city, weather.summary());
                self.status = WeatherStatus::Ready(weather);
            }
            Err(e) => {
                tracing::warn!("Weather fetch failed: {}", e);
                self.status = WeatherStatus::Failed(e.user_message().to_string());
            }
        }
    }
}

impl Section for WeatherSection {
    fn name(&self) -> &str {
        "weather"
    }

    fn init(&mut self, _ctx: &SectionContext) -> Result<()> {
        Ok(())
    }

    fn render_lines(&self) -> Vec<String> {
        match &self.status {
            WeatherStatus::Disabled => {
                vec!["Weather disabled (no API key configured)".to_string()]
            }
            WeatherStatus::Pending => vec!["Fetching weather...".to_string()],
            WeatherStatus::Ready(weather) => vec![weather.summary(), weather.city.clone()],
            WeatherStatus::Failed(message) => vec![message.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn config_without_key() -> WeatherConfig {
        WeatherConfig::default()
    }

    fn config_with_key() -> WeatherConfig {
        WeatherConfig {
            api_key: Some("test-key".to_string()),
            ..WeatherConfig::default()
        }
    }

    #[test]
    fn test_no_api_key_renders_disabled_notice() {
        let section = WeatherSection::new(config_without_key());
        assert_eq!(
            section.render_lines(),
            ["Weather disabled (no API key configured)"]
        );
    }

    #[test]
    fn test_pending_before_refresh() {
        let section = WeatherSection::new(config_with_key());
        assert_eq!(section.render_lines(), ["Fetching weather..."]);
    }

    #[tokio::test]
    async fn test_unreachable_locator_renders_cant_find_you() {
        let mut config = config_with_key();
        // Nothing listens here; the locate call fails fast
        config.locate_endpoint = "http://127.0.0.1:1/json/".to_string();

        let mut section = WeatherSection::new(config);
        section.refresh().await;

        assert_eq!(section.render_lines(), ["can't find you"]);
    }
}
