//! Weather CSS - a Lambda that serves a stylesheet reflecting the current weather.
//!
//! Each request triggers one lookup of current conditions in New York City
//! through the Open-Meteo forecast API. The reading is classified as snow,
//! rain, wind or clear, and the matching stylesheet fragment is returned with
//! open CORS and a 15 minute cache hint.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the Open-Meteo call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use weather_css::api::render_stylesheet;
//! use weather_css::core::config::AppConfig;
//! use weather_css::weather::OpenMeteoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     weather_css::setup_logging();
//!
//!     let client = OpenMeteoClient::new(&AppConfig::default())?;
//!     let css = render_stylesheet(&client).await;
//!     println!("{css}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod stylesheet;
pub mod weather;

pub use errors::WeatherError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start.
///
/// # Example
///
/// ```
/// weather_css::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (tests, doc examples) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
