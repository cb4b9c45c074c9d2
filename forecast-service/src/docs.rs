//! OpenAPI document generation and the Swagger UI.
//!
//! The document is derived at compile time from the `#[utoipa::path]`
//! annotations on the handlers, serialized once during startup and served
//! as-is for the lifetime of the process.

use crate::{handlers, startup::AppState};
use service_core::axum::{
    body::Bytes,
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use service_core::error::AppError;
use std::sync::Arc;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::{Config, Url};

/// Where the machine-readable document is served.
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

/// Display name of the document inside the Swagger UI.
pub const SWAGGER_UI_NAME: &str = "My API V1";

const TERMS_OF_SERVICE_URL: &str = "https://example.com/tos";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "My API",
        version = "1",
        description = "A simple example ASP.NET Core Web API",
        contact(name = "Your Name", email = "Your Email", url = "https://example.com"),
        license(name = "Use under LICX", url = "https://example.com/license")
    ),
    paths(handlers::weather_forecast::get_forecast),
    modifiers(&TermsOfService),
    tags(
        (name = "WeatherForecast", description = "Weather forecast lookups"),
    )
)]
pub struct ApiDoc;

struct TermsOfService;

impl Modify for TermsOfService {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.terms_of_service = Some(TERMS_OF_SERVICE_URL.to_string());
    }
}

/// The serialized document plus the UI configuration pointing at it.
#[derive(Clone)]
pub struct ApiDocument {
    json: Bytes,
    ui_config: Arc<Config<'static>>,
}

impl ApiDocument {
    pub fn build() -> Result<Self, AppError> {
        let json = ApiDoc::openapi().to_pretty_json().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Failed to serialize OpenAPI document: {}",
                e
            ))
        })?;

        let ui_config = Config::new([Url::new(SWAGGER_UI_NAME, OPENAPI_JSON_PATH)]);

        Ok(Self {
            json: Bytes::from(json),
            ui_config: Arc::new(ui_config),
        })
    }

    pub fn json(&self) -> &Bytes {
        &self.json
    }
}

/// Serve the OpenAPI document built at startup.
pub async fn openapi_json(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.docs.json.clone(),
    )
}

/// Serve the Swagger UI from the application root. `/` maps to the UI's
/// index page, any other path to the bundled asset with that name.
pub async fn swagger_ui(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let asset = uri.path().trim_start_matches('/');

    match utoipa_swagger_ui::serve(asset, state.docs.ui_config.clone()) {
        Ok(Some(file)) => Ok((
            [(header::CONTENT_TYPE, file.content_type)],
            file.bytes.to_vec(),
        )
            .into_response()),
        Ok(None) => Err(AppError::NotFound(anyhow::anyhow!(
            "No documentation asset at {}",
            uri.path()
        ))),
        Err(e) => Err(AppError::InternalError(anyhow::anyhow!(
            "Failed to serve documentation UI: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_only_the_forecast_route() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.paths.paths.len(), 1);
        assert!(openapi.paths.paths.contains_key("/WeatherForecast/{id}"));
    }

    #[test]
    fn test_document_metadata() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.info.title, "My API");
        assert_eq!(openapi.info.version, "1");
        assert_eq!(
            openapi.info.terms_of_service.as_deref(),
            Some(TERMS_OF_SERVICE_URL)
        );

        let license = openapi.info.license.expect("license should be set");
        assert_eq!(license.name, "Use under LICX");

        let contact = openapi.info.contact.expect("contact should be set");
        assert_eq!(contact.name.as_deref(), Some("Your Name"));
        assert_eq!(contact.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_build_serializes_document() {
        let docs = ApiDocument::build().unwrap();
        let value: serde_json::Value = serde_json::from_slice(docs.json()).unwrap();
        assert_eq!(value["info"]["termsOfService"], TERMS_OF_SERVICE_URL);
        assert_eq!(
            value["info"]["description"],
            "A simple example ASP.NET Core Web API"
        );
    }

    #[test]
    fn test_operation_description_carries_sample_request() {
        let docs = ApiDocument::build().unwrap();
        let value: serde_json::Value = serde_json::from_slice(docs.json()).unwrap();
        let description = value["paths"]["/WeatherForecast/{id}"]["get"]["description"]
            .as_str()
            .expect("operation description should be set");

        assert!(description.contains("GET /WeatherForecast/12345678-1234-1234-1234-123456789012"));
        assert!(description.contains('{'));
        assert!(description.contains('}'));
    }
}
