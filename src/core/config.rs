use std::env;
use std::time::Duration;

use crate::errors::WeatherError;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Overrides the Open-Meteo forecast endpoint when set.
    pub weather_api_url: Option<String>,
    pub http_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, WeatherError> {
        Ok(Self {
            weather_api_url: env::var("WEATHER_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            http_timeout: env::var("WEATHER_HTTP_TIMEOUT_SECS")
                .ok()
                .map(|raw| parse_timeout_secs(&raw))
                .transpose()?,
        })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, WeatherError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(WeatherError::ConfigError(
            "WEATHER_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(WeatherError::ConfigError(format!(
            "WEATHER_HTTP_TIMEOUT_SECS: {}",
            e
        ))),
    }
}
