//! Axum handlers for the public JSON endpoints
//!
//! Every handler answers 200 with a freshly stamped body; only the router fallback produces a 404.

use axum::{extract::Query, Json};

use crate::domain::{
    greeting::{greeting_message, resolve_name, WELCOME_MESSAGE},
    responses::{GenericResponse, HealthResponse},
};
use crate::errors::AppError;

pub async fn welcome() -> Json<GenericResponse> {
    Json(GenericResponse::now(WELCOME_MESSAGE))
}

/// Greets the first `name` query value, or `World` when it is missing or empty.
///
/// Other keys and repeated `name` values are ignored.
pub async fn hello(Query(query): Query<Vec<(String, String)>>) -> Json<GenericResponse> {
    let name = resolve_name(&query);
    Json(GenericResponse::now(greeting_message(name)))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub async fn not_found() -> AppError {
    AppError::not_found("no route matches the requested path")
}
