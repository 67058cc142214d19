//! Open-Meteo forecast API client
//!
//! Only the `current` block is requested. Units are the provider defaults:
//! millimetres for rain and showers, centimetres for snowfall and km/h for gusts.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::provider::WeatherProvider;
use crate::core::config::AppConfig;
use crate::core::models::WeatherSnapshot;
use crate::errors::WeatherError;

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// New York City.
pub const LATITUDE: &str = "40.7128";
pub const LONGITUDE: &str = "-74.006";

pub const CURRENT_FIELDS: &str = "rain,showers,snowfall,wind_gusts_10m,wind_direction_10m";

const MAX_ERROR_BODY_BYTES: usize = 200;

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config
                .weather_api_url
                .clone()
                .unwrap_or_else(|| OPEN_METEO_FORECAST_URL.to_string()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(level = "info", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_current(&self) -> Result<WeatherSnapshot, WeatherError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", LATITUDE),
                ("longitude", LONGITUDE),
                ("current", CURRENT_FIELDS),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        #[cfg(feature = "debug-logs")]
        debug!("Open-Meteo response body:\n{}", body);

        #[cfg(not(feature = "debug-logs"))]
        debug!(status = %status, bytes = body.len(), "Open-Meteo response received");

        if !status.is_success() {
            warn!(status = %status, "Open-Meteo request failed");
            return Err(WeatherError::StatusError {
                status: status.as_u16(),
                reason: error_reason(&body),
            });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        let current = parsed.current.ok_or_else(|| {
            WeatherError::ParseError("response has no current conditions".to_string())
        })?;

        let snapshot = current.into_snapshot();
        info!(?snapshot, "Fetched current conditions");
        Ok(snapshot)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current(&self) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch_current().await
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

// Open-Meteo sends `null` for readings a station has no value for.
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    rain: Option<f64>,
    showers: Option<f64>,
    snowfall: Option<f64>,
    wind_gusts_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
}

impl CurrentConditions {
    fn into_snapshot(self) -> WeatherSnapshot {
        WeatherSnapshot {
            rain: self.rain.unwrap_or(0.0),
            showers: self.showers.unwrap_or(0.0),
            snowfall: self.snowfall.unwrap_or(0.0),
            wind_gusts: self.wind_gusts_10m.unwrap_or(0.0),
            wind_direction: self.wind_direction_10m,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    reason: String,
}

fn error_reason(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.reason)
        .unwrap_or_else(|_| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
