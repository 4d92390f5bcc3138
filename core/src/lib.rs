//! # Movie API Core
//!
//! Domain types and business logic for the movie API.
//!
//! This crate has no knowledge of HTTP. It provides:
//!
//! - **[`Movie`]**: the sole entity, an id/title pair
//! - **[`MovieStore`]**: an ordered in-memory collection that owns the id counter
//! - **[`MovieService`]**: the create/read/update/delete capability handlers depend on
//! - **[`InMemoryMovieService`]**: the production implementation, a store behind a lock
//!
//! ## Example
//!
//! ```
//! use movie_api_core::{InMemoryMovieService, MovieDraft, MovieError, MovieService};
//!
//! # async fn example() {
//! let service = InMemoryMovieService::new();
//!
//! let movie = service.create_movie(MovieDraft::new("Inception")).await;
//! let renamed = service
//!     .update_movie_with_id(movie.id, MovieDraft::new("Inception (2010)"))
//!     .await;
//! assert!(renamed.is_ok());
//!
//! service.delete_movie_with_id(movie.id).await;
//! let missing = service
//!     .update_movie_with_id(movie.id, MovieDraft::new("Gone"))
//!     .await;
//! assert_eq!(missing, Err(MovieError::NotFound(movie.id)));
//! # }
//! ```

pub mod error;
pub mod movie;
pub mod service;
pub mod store;

pub use error::{MovieError, Result};
pub use movie::{Movie, MovieDraft, MovieId};
pub use service::{InMemoryMovieService, MovieService};
pub use store::MovieStore;
