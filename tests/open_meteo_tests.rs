use serde_json::json;
use std::time::Duration;
use weather_css::api::render_stylesheet;
use weather_css::core::config::AppConfig;
use weather_css::core::models::WeatherState;
use weather_css::errors::WeatherError;
use weather_css::weather::open_meteo::CURRENT_FIELDS;
use weather_css::weather::{OpenMeteoClient, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_at(base_url: String, http_timeout: Option<Duration>) -> OpenMeteoClient {
    let config = AppConfig {
        weather_api_url: Some(base_url),
        http_timeout,
    };
    OpenMeteoClient::new(&config).unwrap()
}

fn client_for(server: &MockServer) -> OpenMeteoClient {
    client_at(format!("{}/v1/forecast", server.uri()), None)
}

#[tokio::test]
async fn test_requests_fixed_location_and_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.7128"))
        .and(query_param("longitude", "-74.006"))
        .and(query_param("current", CURRENT_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 40.710335,
            "longitude": -73.99307,
            "current": {
                "time": "2025-01-15T14:00",
                "interval": 900,
                "rain": 0.2,
                "showers": 0.1,
                "snowfall": 0.0,
                "wind_gusts_10m": 31.7,
                "wind_direction_10m": 250
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server).current().await.unwrap();
    assert_eq!(snapshot.rain, 0.2);
    assert_eq!(snapshot.showers, 0.1);
    assert_eq!(snapshot.wind_gusts, 31.7);
    assert_eq!(snapshot.wind_direction, Some(250.0));
    assert_eq!(snapshot.classify(), WeatherState::Rain);
}

#[tokio::test]
async fn test_empty_current_block_is_clear() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "current": {} })))
        .mount(&server)
        .await;

    let css = render_stylesheet(&client_for(&server)).await;
    assert_eq!(css, "/* Weather: Clear */");
}

#[tokio::test]
async fn test_missing_current_block_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "latitude": 40.7 })))
        .mount(&server)
        .await;

    let err = client_for(&server).current().await.unwrap_err();
    assert!(matches!(err, WeatherError::ParseError(_)));
}

#[tokio::test]
async fn test_invalid_json_becomes_comment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let css = render_stylesheet(&client_for(&server)).await;
    assert!(css.starts_with("/* Error fetching weather: Failed to parse weather response"));
}

#[tokio::test]
async fn test_api_error_reason_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": true,
            "reason": "Parameter 'current' is invalid"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).current().await.unwrap_err();
    match err {
        WeatherError::StatusError { status, reason } => {
            assert_eq!(status, 400);
            assert_eq!(reason, "Parameter 'current' is invalid");
        }
        other => panic!("Unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_server_error_becomes_comment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let css = render_stylesheet(&client_for(&server)).await;
    assert!(css.contains("Error fetching weather"));
    assert!(css.contains("503"));
    assert!(css.contains("upstream unavailable"));
}

#[tokio::test]
async fn test_unreachable_host_becomes_comment() {
    // Nothing listens on the discard port
    let client = client_at("http://127.0.0.1:9/v1/forecast".to_string(), None);

    let css = render_stylesheet(&client).await;
    assert!(css.starts_with("/* Error fetching weather: Failed to send HTTP request"));
}

#[tokio::test]
async fn test_configured_timeout_applies_to_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "current": {} }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_at(
        format!("{}/v1/forecast", server.uri()),
        Some(Duration::from_secs(1)),
    );

    let err = client.current().await.unwrap_err();
    assert!(matches!(err, WeatherError::HttpError(_)));
}
