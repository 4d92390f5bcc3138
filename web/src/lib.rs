//! Axum HTTP layer for the movie API.
//!
//! Handlers are thin adapters: they extract the path id and JSON body, call
//! the injected [`MovieService`](movie_api_core::MovieService), and map the
//! result to a status code and body.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at the router
//! 2. **Extract** the movie id and/or a non-null JSON body (400 on failure)
//! 3. **Call** the movie service from [`AppState`]
//! 4. **Map** the result to a response (`MovieError` becomes 404)
//!
//! # Example
//!
//! ```no_run
//! use movie_api_web::{AppState, build_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = build_app(AppState::in_memory(), false);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use extractors::{MovieIdPath, RequiredJson};
pub use middleware::{REQUEST_ID_HEADER, with_http_layers};
pub use router::{build_app, movie_router};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
