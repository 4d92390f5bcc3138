//! Movie CRUD endpoints.
//!
//! - `GET /movies` - List all movies
//! - `POST /movies` - Create a movie
//! - `PUT /movies/:id` - Rename a movie
//! - `DELETE /movies/:id` - Delete a movie (idempotent)

use crate::WebResult;
use crate::error::AppError;
use crate::extractors::{MovieIdPath, RequiredJson};
use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use movie_api_core::{Movie, MovieDraft, MovieService};
use std::sync::Arc;

/// Location of a single movie resource.
#[must_use]
pub fn movie_location(movie: &Movie) -> String {
    format!("/movies/{}", movie.id)
}

/// List all movies in insertion order.
///
/// # Endpoint
///
/// ```text
/// GET /movies
/// ```
///
/// # Response
///
/// ```json
/// [{ "id": 0, "title": "Inception" }]
/// ```
pub async fn list_movies(State(movies): State<Arc<dyn MovieService>>) -> Json<Vec<Movie>> {
    let all = movies.get_all_movies().await;
    tracing::debug!(count = all.len(), "Listing movies");
    Json(all)
}

/// Create a movie.
///
/// Responds `201 Created` with a `Location` header pointing at the new
/// resource. Any `id` in the body is ignored.
///
/// # Endpoint
///
/// ```text
/// POST /movies
/// Content-Type: application/json
///
/// { "title": "Inception" }
/// ```
///
/// # Errors
///
/// `400 Bad Request` if the body is missing, `null` or not a movie.
pub async fn create_movie(
    State(movies): State<Arc<dyn MovieService>>,
    RequiredJson(draft): RequiredJson<MovieDraft>,
) -> WebResult<Response> {
    let movie = movies.create_movie(draft).await;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    let location = HeaderValue::from_str(&movie_location(&movie))
        .map_err(|e| AppError::from(anyhow::Error::new(e)))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(movie),
    )
        .into_response())
}

/// Replace a movie's title.
///
/// # Endpoint
///
/// ```text
/// PUT /movies/:id
/// Content-Type: application/json
///
/// { "title": "New Title" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if the body is missing, `null` or not a movie
/// - `404 Not Found` if no movie has this id
pub async fn update_movie(
    State(movies): State<Arc<dyn MovieService>>,
    MovieIdPath(id): MovieIdPath,
    RequiredJson(draft): RequiredJson<MovieDraft>,
) -> WebResult<Json<Movie>> {
    let movie = movies
        .update_movie_with_id(id, draft)
        .await
        .inspect_err(|_| tracing::warn!(movie_id = %id, "Update of unknown movie"))?;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie updated");
    Ok(Json(movie))
}

/// Delete a movie.
///
/// Always responds `200 OK`; deleting an unknown id is a no-op.
///
/// # Endpoint
///
/// ```text
/// DELETE /movies/:id
/// ```
pub async fn delete_movie(
    State(movies): State<Arc<dyn MovieService>>,
    MovieIdPath(id): MovieIdPath,
) -> StatusCode {
    movies.delete_movie_with_id(id).await;
    tracing::info!(movie_id = %id, "Movie deleted");
    StatusCode::OK
}
