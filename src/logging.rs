use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub const UNMATCHED_ROUTE: &str = "<unmatched>";

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Route template for the summary line; fallback hits have none.
pub fn route_label(matched: Option<&str>) -> &str {
    matched.unwrap_or(UNMATCHED_ROUTE)
}

/// Logs one summary per request, tagged with the matched route and whether a
/// query string was sent (the greeting reads `name` from it).
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let has_query = request.uri().query().is_some_and(|query| !query.is_empty());
    let route = route_label(
        request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
    )
    .to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();

    info!(
        method = %method,
        route = %route,
        path = %path,
        has_query,
        status = status.as_u16(),
        duration_ms = elapsed_ms,
        "request summary"
    );

    if route == UNMATCHED_ROUTE {
        warn!(method = %method, path = %path, "no matching route");
    }

    response
}
