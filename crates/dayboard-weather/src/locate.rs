//! IP-based geolocation: the headless analogue of a browser location prompt.
//! Failure is reported, not retried; the caller decides what to show.

use crate::types::{Location, LocationError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct IpLocateResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
}

/// Look up the machine's approximate location from its public IP.
pub async fn locate(endpoint: &str) -> Result<Location, LocationError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| LocationError::Other(e.to_string()))?;

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| {
            tracing::debug!("Location request failed: {}", e);
            LocationError::ServiceUnavailable
        })?;

    if !response.status().is_success() {
        tracing::debug!("Location service returned status {}", response.status());
        return Err(LocationError::ServiceUnavailable);
    }

    let body: IpLocateResponse = response
        .json()
        .await
        .map_err(|e| LocationError::Other(format!("unreadable response: {}", e)))?;

    match (body.latitude, body.longitude) {
        (Some(latitude), Some(longitude)) => {
            tracing::info!("Located at: {}, {}", latitude, longitude);
            Ok(Location {
                latitude,
                longitude,
                city: body.city,
            })
        }
        _ => Err(LocationError::Other(
            "response had no coordinates".to_string(),
        )),
    }
}
