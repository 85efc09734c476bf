use axum::{middleware, routing::any, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod server;

pub fn build_app() -> Router {
    Router::new()
        .route("/", any(http::handlers::welcome))
        .route("/api/hello", any(http::handlers::hello))
        .route("/api/health", any(http::handlers::health))
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
