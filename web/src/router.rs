//! Movie API router.
//!
//! Composes all handlers into a single Axum router.

use crate::handlers::{self, health_check};
use crate::middleware::with_http_layers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Create the movie API router.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `GET /movies` - List movies
/// - `POST /movies` - Create a movie
/// - `PUT /movies/:id` - Rename a movie
/// - `DELETE /movies/:id` - Delete a movie
///
/// # Example
///
/// ```rust,ignore
/// let app = movie_router(AppState::in_memory())
///     .layer(TraceLayer::new_for_http());
/// ```
pub fn movie_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/movies",
            get(handlers::list_movies).post(handlers::create_movie),
        )
        .route(
            "/movies/:id",
            put(handlers::update_movie).delete(handlers::delete_movie),
        )
        .with_state(state)
}

/// The router with request-id, tracing and optional CORS layers applied.
///
/// This is what the server binary serves.
pub fn build_app(state: AppState, cors_permissive: bool) -> Router {
    with_http_layers(movie_router(state), cors_permissive)
}
