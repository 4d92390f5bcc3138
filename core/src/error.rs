//! Error types for movie operations.

use crate::movie::MovieId;
use thiserror::Error;

/// Errors returned by [`MovieService`](crate::service::MovieService) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    /// No movie with this id is in the collection.
    #[error("Movie with id {0} not found")]
    NotFound(MovieId),
}

/// Result type for movie operations.
pub type Result<T> = std::result::Result<T, MovieError>;
