use async_trait::async_trait;

use crate::core::models::WeatherSnapshot;
use crate::errors::WeatherError;

/// Source of the current weather at the location the stylesheet is built for.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self) -> Result<WeatherSnapshot, WeatherError>;
}
