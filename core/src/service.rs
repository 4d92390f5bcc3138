//! The movie service abstraction and its in-memory implementation.
//!
//! HTTP handlers only ever talk to a [`MovieService`]. The production
//! composition injects an [`InMemoryMovieService`]; tests can substitute any
//! other implementation.
//!
//! # Dyn Compatibility
//!
//! The trait returns [`BoxFuture`]s instead of using `async fn` so it can be
//! held as `Arc<dyn MovieService>` in router state.

use crate::error::{MovieError, Result};
use crate::movie::{Movie, MovieDraft, MovieId};
use crate::store::MovieStore;
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Create, read, update and delete operations over a movie collection.
pub trait MovieService: Send + Sync {
    /// All current movies in insertion order.
    fn get_all_movies(&self) -> BoxFuture<'_, Vec<Movie>>;

    /// Store a new movie and return it with its assigned id.
    fn create_movie(&self, draft: MovieDraft) -> BoxFuture<'_, Movie>;

    /// Replace the title of the movie with `id`.
    ///
    /// Only the title changes; the id is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if no movie has that id.
    fn update_movie_with_id(&self, id: MovieId, update: MovieDraft)
    -> BoxFuture<'_, Result<Movie>>;

    /// Remove the movie with `id`. Unknown ids are ignored.
    fn delete_movie_with_id(&self, id: MovieId) -> BoxFuture<'_, ()>;
}

/// [`MovieService`] backed by a [`MovieStore`] behind an async read/write lock.
///
/// Cloning is cheap and clones share the same collection.
///
/// # Example
///
/// ```
/// use movie_api_core::{InMemoryMovieService, MovieDraft, MovieService};
///
/// # async fn example() {
/// let service = InMemoryMovieService::new();
/// let movie = service.create_movie(MovieDraft::new("Inception")).await;
///
/// let all = service.get_all_movies().await;
/// assert_eq!(all, vec![movie]);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieService {
    store: Arc<RwLock<MovieStore>>,
}

impl InMemoryMovieService {
    /// Create a service over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing store.
    #[must_use]
    pub fn with_store(store: MovieStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Number of stored movies.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether no movies are stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl MovieService for InMemoryMovieService {
    fn get_all_movies(&self) -> BoxFuture<'_, Vec<Movie>> {
        Box::pin(async move { self.store.read().await.all().to_vec() })
    }

    fn create_movie(&self, draft: MovieDraft) -> BoxFuture<'_, Movie> {
        Box::pin(async move {
            let movie = self.store.write().await.insert(draft);
            tracing::debug!(movie_id = %movie.id, "Movie stored");
            movie
        })
    }

    fn update_movie_with_id(
        &self,
        id: MovieId,
        update: MovieDraft,
    ) -> BoxFuture<'_, Result<Movie>> {
        Box::pin(async move {
            self.store
                .write()
                .await
                .update_title(id, update.title)
                .ok_or(MovieError::NotFound(id))
        })
    }

    fn delete_movie_with_id(&self, id: MovieId) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            if self.store.write().await.remove(id).is_none() {
                tracing::debug!(movie_id = %id, "Delete of unknown movie ignored");
            }
        })
    }
}
