//! service-core: Shared infrastructure for HTTP microservices.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
