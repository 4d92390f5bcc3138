//! Movie records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored movie.
///
/// Ids are handed out by [`MovieStore`](crate::store::MovieStore) in strictly
/// increasing order starting at `0` and are never reused, even after the movie
/// is deleted. The type is signed so any integer path segment names an id;
/// negative ids are never assigned and always resolve to "not found".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    /// Create a movie id from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The id that follows this one. Saturates at `i64::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned at creation, immutable afterwards.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
}

/// Client-supplied movie data, used for both create and update.
///
/// An `id` field in the incoming JSON is ignored: ids are always assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    /// Movie title.
    pub title: String,
}

impl MovieDraft {
    /// Create a draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
