//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod health;
pub mod movies;

pub use health::health_check;
pub use movies::{create_movie, delete_movie, list_movies, update_movie};
