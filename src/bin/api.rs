pub use weather_css::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    weather_css::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
