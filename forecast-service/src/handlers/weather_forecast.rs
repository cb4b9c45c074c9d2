use axum::{extract::Path, http::StatusCode};
use uuid::Uuid;

/// Get a book by id
///
/// **Sample request**:
///
/// ```text
/// GET /WeatherForecast/12345678-1234-1234-1234-123456789012
///
/// {
/// }
/// ```
#[utoipa::path(
    get,
    path = "/WeatherForecast/{id}",
    params(
        ("id" = Uuid, Path, description = "The id of the book you want to get")
    ),
    responses(
        (status = 200, description = "A book with the specified id"),
        (status = 400, description = "The id is not a valid UUID")
    ),
    tag = "WeatherForecast"
)]
pub async fn get_forecast(Path(id): Path<Uuid>) -> StatusCode {
    tracing::debug!(%id, "Forecast requested");
    StatusCode::OK
}
