//! End-to-end test over a real TCP listener.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use movie_api_server::{Config, serve};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_crud_round_over_tcp_and_graceful_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        serve(listener, &Config::default(), async {
            let _ = stop_rx.await;
        })
        .await
    });

    let client = reqwest::Client::new();

    let health = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), "System healthy");

    let created = client
        .post(format!("{base}/movies"))
        .json(&json!({ "title": "Inception" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);
    assert_eq!(created.headers()["location"], "/movies/0");
    assert!(created.headers().contains_key("x-request-id"));

    let updated = client
        .put(format!("{base}/movies/0"))
        .json(&json!({ "title": "New Title" }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status(), reqwest::StatusCode::OK);

    let movies: Value = client
        .get(format!("{base}/movies"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(movies, json!([{ "id": 0, "title": "New Title" }]));

    let deleted = client
        .delete(format!("{base}/movies/0"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), reqwest::StatusCode::OK);

    drop(client);
    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
