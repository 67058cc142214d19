//! API Lambda handler.
//!
//! Every request, whatever its path or method, gets the stylesheet for the
//! weather right now. Failures never surface as HTTP errors: they come back
//! as a CSS comment with the usual headers.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::stylesheet;
use crate::weather::{OpenMeteoClient, WeatherProvider};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error of its own; the `Result` is what `lambda_runtime`
/// expects from a service function.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let path = event
        .payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| event.payload.get("path").and_then(|v| v.as_str()))
        .unwrap_or("/");
    info!(raw_path = %path, "Weather stylesheet requested");

    let client = AppConfig::from_env().and_then(|config| OpenMeteoClient::new(&config));
    let css = match client {
        Ok(client) => render_stylesheet(&client).await,
        Err(e) => {
            error!("Config error: {}", e);
            stylesheet::error_comment(&e)
        }
    };

    Ok(helpers::css_response(&css))
}

/// Fetches current conditions from `provider` and picks the matching fragment.
pub async fn render_stylesheet(provider: &dyn WeatherProvider) -> String {
    match provider.current().await {
        Ok(snapshot) => {
            let state = snapshot.classify();
            info!(?state, "Selected weather stylesheet");
            stylesheet::for_state(state).to_string()
        }
        Err(e) => {
            error!("Failed to fetch weather: {}", e);
            stylesheet::error_comment(&e)
        }
    }
}
