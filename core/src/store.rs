//! Ordered in-memory movie collection.
//!
//! The store keeps movies in insertion order and owns the id counter used to
//! number them. Lookups are linear scans over the collection.

use crate::movie::{Movie, MovieDraft, MovieId};

/// In-memory ordered collection of movies.
///
/// The store is a plain value with no interior locking. Sharing it between
/// tasks is the job of [`InMemoryMovieService`](crate::service::InMemoryMovieService).
///
/// # Example
///
/// ```
/// use movie_api_core::{MovieDraft, MovieId, MovieStore};
///
/// let mut store = MovieStore::new();
/// let first = store.insert(MovieDraft::new("Alien"));
/// let second = store.insert(MovieDraft::new("Aliens"));
///
/// assert_eq!(first.id, MovieId::new(0));
/// assert_eq!(second.id, MovieId::new(1));
///
/// store.remove(first.id);
/// let third = store.insert(MovieDraft::new("Alien 3"));
/// assert_eq!(third.id, MovieId::new(2)); // ids are never reused
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: MovieId,
}

impl MovieStore {
    /// Create an empty store whose first movie gets id `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All movies in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Find a movie by id.
    #[must_use]
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Append a movie, assigning it the next id.
    pub fn insert(&mut self, draft: MovieDraft) -> Movie {
        let movie = Movie {
            id: self.next_id,
            title: draft.title,
        };
        self.next_id = self.next_id.next();
        self.movies.push(movie.clone());
        movie
    }

    /// Replace the title of the movie with `id`.
    ///
    /// Returns the updated movie, or `None` if no movie has that id.
    pub fn update_title(&mut self, id: MovieId, title: String) -> Option<Movie> {
        let movie = self.movies.iter_mut().find(|movie| movie.id == id)?;
        movie.title = title;
        Some(movie.clone())
    }

    /// Remove the movie with `id`, returning it if it was present.
    pub fn remove(&mut self, id: MovieId) -> Option<Movie> {
        let index = self.movies.iter().position(|movie| movie.id == id)?;
        Some(self.movies.remove(index))
    }

    /// The id the next inserted movie will receive.
    #[must_use]
    pub const fn next_id(&self) -> MovieId {
        self.next_id
    }

    /// Number of stored movies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the store holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = MovieStore::new();

        let a = store.insert(MovieDraft::new("Inception"));
        let b = store.insert(MovieDraft::new("Memento"));

        assert_eq!(a.id, MovieId::new(0));
        assert_eq!(a.title, "Inception");
        assert_eq!(b.id, MovieId::new(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), MovieId::new(2));
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let mut store = MovieStore::new();
        for title in ["C", "A", "B"] {
            store.insert(MovieDraft::new(title));
        }

        let titles: Vec<_> = store.all().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_update_title_keeps_id() {
        let mut store = MovieStore::new();
        let movie = store.insert(MovieDraft::new("Old Title"));

        let updated = store
            .update_title(movie.id, "New Title".to_string())
            .unwrap();

        assert_eq!(updated.id, movie.id);
        assert_eq!(updated.title, "New Title");
        assert_eq!(store.get(movie.id).unwrap().title, "New Title");
    }

    #[test]
    fn test_update_unknown_id_changes_nothing() {
        let mut store = MovieStore::new();
        store.insert(MovieDraft::new("Heat"));

        assert!(store.update_title(MovieId::new(5), "Ronin".to_string()).is_none());
        assert_eq!(store.all()[0].title, "Heat");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_noop_for_unknown_id() {
        let mut store = MovieStore::new();
        let movie = store.insert(MovieDraft::new("Jaws"));

        assert_eq!(store.remove(movie.id), Some(movie.clone()));
        assert_eq!(store.remove(movie.id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_independent_stores_have_independent_counters() {
        let mut first = MovieStore::new();
        let mut second = MovieStore::new();

        first.insert(MovieDraft::new("One"));
        first.insert(MovieDraft::new("Two"));

        assert_eq!(second.insert(MovieDraft::new("Other")).id, MovieId::new(0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(String),
        Remove(usize),
        Update(usize, String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Op::Insert),
            (0usize..16).prop_map(Op::Remove),
            ((0usize..16), "[a-z]{1,8}").prop_map(|(i, t)| Op::Update(i, t)),
        ]
    }

    proptest! {
        #[test]
        fn prop_ids_strictly_increase_and_never_repeat(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut store = MovieStore::new();
            let mut assigned: Vec<MovieId> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(title) => {
                        let movie = store.insert(MovieDraft::new(title));
                        if let Some(last) = assigned.last() {
                            prop_assert!(movie.id > *last);
                        }
                        assigned.push(movie.id);
                    }
                    Op::Remove(index) => {
                        if let Some(id) = assigned.get(index).copied() {
                            store.remove(id);
                        }
                    }
                    Op::Update(index, title) => {
                        if let Some(id) = assigned.get(index).copied() {
                            if let Some(updated) = store.update_title(id, title) {
                                prop_assert_eq!(updated.id, id);
                            }
                        }
                    }
                }
            }

            let mut ids: Vec<_> = store.all().iter().map(|m| m.id).collect();
            let before = ids.len();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
