//! Custom Axum extractors.
//!
//! - `RequiredJson`: a JSON body that must be present and non-null
//! - `MovieIdPath`: the `{id}` path segment parsed as a [`MovieId`]
//!
//! Both reject with an [`AppError`] so every 400 shares the same JSON error body.
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     MovieIdPath(id): MovieIdPath,
//!     RequiredJson(draft): RequiredJson<MovieDraft>,
//! ) -> Result<Json<Movie>, AppError> {
//!     ...
//! }
//! ```

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use movie_api_core::MovieId;
use serde::de::DeserializeOwned;

/// JSON request body that must be present, well-formed and not `null`.
///
/// A missing body, a wrong content type, malformed JSON and a literal `null`
/// are all rejected with `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct RequiredJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RequiredJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Option<T>>::from_request(req, state).await {
            Ok(Json(Some(value))) => Ok(Self(value)),
            Ok(Json(None)) => {
                tracing::warn!("Rejected null request body");
                Err(AppError::bad_request("Request body must not be null"))
            }
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::bad_request(rejection.body_text()))
            }
        }
    }
}

/// Movie id taken from the `{id}` path segment.
///
/// Any integer is accepted, including negatives, which never match a stored
/// movie. A non-integer segment is rejected with `400 Bad Request`.
#[derive(Debug, Clone, Copy)]
pub struct MovieIdPath(pub MovieId);

#[async_trait]
impl<S> FromRequestParts<S> for MovieIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(MovieId::new(id)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{StatusCode, header},
    };
    use movie_api_core::MovieDraft;

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/movies")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn movie_id_from(uri: &str) -> Result<MovieIdPath, AppError> {
        use axum::{Router, routing::get};
        use tower::ServiceExt;

        let (tx, rx) = std::sync::mpsc::channel();
        let app = Router::new().route(
            "/movies/:id",
            get(move |req: Request| async move {
                let (mut parts, _) = req.into_parts();
                let _ = tx.send(MovieIdPath::from_request_parts(&mut parts, &()).await);
            }),
        );
        app.oneshot(
            axum::http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
        rx.recv().unwrap()
    }

    #[tokio::test]
    async fn test_movie_id_path_accepts_negative_integer() {
        let MovieIdPath(id) = movie_id_from("/movies/-1").await.unwrap();
        assert_eq!(id, MovieId::new(-1));
    }

    #[tokio::test]
    async fn test_movie_id_path_rejects_non_integer() {
        let err = movie_id_from("/movies/abc").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_required_json_accepts_object() {
        let RequiredJson(draft) =
            RequiredJson::<MovieDraft>::from_request(json_request(r#"{"title":"Heat"}"#), &())
                .await
                .unwrap();
        assert_eq!(draft.title, "Heat");
    }

    #[tokio::test]
    async fn test_required_json_rejects_null() {
        let err = RequiredJson::<MovieDraft>::from_request(json_request("null"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_required_json_rejects_empty_body() {
        let err = RequiredJson::<MovieDraft>::from_request(json_request(""), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_required_json_rejects_missing_content_type() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/movies")
            .body(Body::from(r#"{"title":"Heat"}"#))
            .unwrap();

        let err = RequiredJson::<MovieDraft>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
