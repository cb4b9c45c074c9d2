use forecast_service::{config::ForecastConfig, Application};
use service_core::error::AppError;
use service_core::observability::logging::init_tracing;
use tracing::Instrument;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = ForecastConfig::from_env()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting forecast service"
    );

    let service_span = tracing::info_span!(
        "service",
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
    );

    let app = Application::build(config).await?;

    app.run_until_stopped().instrument(service_span).await
}
