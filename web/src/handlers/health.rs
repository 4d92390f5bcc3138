//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the process is up.

use axum::http::StatusCode;

/// Body returned by [`health_check`].
pub const HEALTHY: &str = "System healthy";

/// Liveness check.
///
/// Always returns 200 with a fixed plain-text body, independent of the movie
/// collection.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```text
/// System healthy
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}
