//! # Movie API Testing
//!
//! Test doubles and fixtures for the movie API.
//!
//! - [`RecordingMovieService`]: a [`MovieService`] that records every call
//!   before delegating to an in-memory collection
//! - [`seeded_service`] / [`seeded_store`]: collections pre-filled with titles
//!
//! ## Example
//!
//! ```
//! use movie_api_testing::{RecordingMovieService, ServiceCall};
//! use movie_api_core::{MovieDraft, MovieService};
//!
//! # async fn example() {
//! let service = RecordingMovieService::new();
//! service.create_movie(MovieDraft::new("Heat")).await;
//!
//! assert_eq!(service.calls(), vec![ServiceCall::Create(MovieDraft::new("Heat"))]);
//! # }
//! ```

/// Mock implementations for testing.
pub mod mocks {
    #![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
    #![allow(clippy::missing_panics_doc)]

    use futures::future::BoxFuture;
    use movie_api_core::{InMemoryMovieService, Movie, MovieDraft, MovieId, MovieService, Result};
    use std::sync::{Arc, Mutex};

    /// A call observed by [`RecordingMovieService`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ServiceCall {
        /// `get_all_movies`
        GetAll,
        /// `create_movie` with the draft it received
        Create(MovieDraft),
        /// `update_movie_with_id` with the id and draft it received
        Update(MovieId, MovieDraft),
        /// `delete_movie_with_id` with the id it received
        Delete(MovieId),
    }

    /// Movie service that records calls and delegates to an in-memory collection.
    ///
    /// Clones share both the call log and the collection, so a clone can be
    /// handed to the router while the test keeps the original for assertions.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingMovieService {
        inner: InMemoryMovieService,
        calls: Arc<Mutex<Vec<ServiceCall>>>,
    }

    impl RecordingMovieService {
        /// Create a recording service over an empty collection.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a recording service over an existing in-memory service.
        #[must_use]
        pub fn wrapping(inner: InMemoryMovieService) -> Self {
            Self {
                inner,
                calls: Arc::default(),
            }
        }

        /// Calls observed so far, oldest first.
        #[must_use]
        pub fn calls(&self) -> Vec<ServiceCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Forget all recorded calls (for test isolation).
        pub fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: ServiceCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl MovieService for RecordingMovieService {
        fn get_all_movies(&self) -> BoxFuture<'_, Vec<Movie>> {
            self.record(ServiceCall::GetAll);
            self.inner.get_all_movies()
        }

        fn create_movie(&self, draft: MovieDraft) -> BoxFuture<'_, Movie> {
            self.record(ServiceCall::Create(draft.clone()));
            self.inner.create_movie(draft)
        }

        fn update_movie_with_id(
            &self,
            id: MovieId,
            update: MovieDraft,
        ) -> BoxFuture<'_, Result<Movie>> {
            self.record(ServiceCall::Update(id, update.clone()));
            self.inner.update_movie_with_id(id, update)
        }

        fn delete_movie_with_id(&self, id: MovieId) -> BoxFuture<'_, ()> {
            self.record(ServiceCall::Delete(id));
            self.inner.delete_movie_with_id(id)
        }
    }
}

/// Fixtures for building pre-populated collections.
pub mod helpers {
    use movie_api_core::{InMemoryMovieService, MovieDraft, MovieStore};

    /// A store holding `titles` in order, with ids `0..titles.len()`.
    #[must_use]
    pub fn seeded_store(titles: &[&str]) -> MovieStore {
        let mut store = MovieStore::new();
        for title in titles {
            store.insert(MovieDraft::new(*title));
        }
        store
    }

    /// An in-memory service over [`seeded_store`].
    #[must_use]
    pub fn seeded_service(titles: &[&str]) -> InMemoryMovieService {
        InMemoryMovieService::with_store(seeded_store(titles))
    }
}

pub use helpers::{seeded_service, seeded_store};
pub use mocks::{RecordingMovieService, ServiceCall};
