use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Weather API returned status {status}: {reason}")]
    StatusError { status: u16, reason: String },

    #[error("Failed to parse weather response: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(error: reqwest::Error) -> Self {
        WeatherError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(error: serde_json::Error) -> Self {
        WeatherError::ParseError(error.to_string())
    }
}
