//! Shared helpers for forecast-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use forecast_service::{
    build_router,
    config::{Environment, ForecastConfig},
    AppState, Application,
};
use tower::util::ServiceExt;

/// Build the router for the given environment without binding a socket.
pub fn router(environment: Environment) -> Router {
    let config = ForecastConfig::with_environment(environment);
    let state = AppState::new(config).expect("Failed to build application state");
    build_router(state)
}

/// Send a GET request through the router.
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Failed to execute request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the application on a random port.
    pub async fn spawn(environment: Environment) -> Self {
        let mut config = ForecastConfig::with_environment(environment);
        config.common.port = 0;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}
