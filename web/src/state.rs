//! Application state for Axum handlers.

use axum::extract::FromRef;
use movie_api_core::{InMemoryMovieService, MovieService};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds the movie service as a trait object so the composition root decides
/// which implementation handlers talk to. Cloned (cheaply via `Arc`) for each
/// request.
#[derive(Clone)]
pub struct AppState {
    /// Movie service the handlers delegate to
    pub movies: Arc<dyn MovieService>,
}

impl AppState {
    /// Create application state around a movie service.
    #[must_use]
    pub fn new(movies: Arc<dyn MovieService>) -> Self {
        Self { movies }
    }

    /// Application state backed by a fresh, empty in-memory service.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMovieService::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl FromRef<AppState> for Arc<dyn MovieService> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_service() {
        let state = AppState::in_memory();
        let clone = state.clone();

        clone
            .movies
            .create_movie(movie_api_core::MovieDraft::new("Alien"))
            .await;

        assert_eq!(state.movies.get_all_movies().await.len(), 1);
    }
}
