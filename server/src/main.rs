//! Movie API server binary.
//!
//! # Usage
//!
//! ```bash
//! PORT=3000 cargo run --bin movie-api
//! ```
//!
//! # Example Requests
//!
//! ```bash
//! curl -X POST http://localhost:3000/movies \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Inception"}'
//!
//! curl http://localhost:3000/movies
//!
//! curl -X PUT http://localhost:3000/movies/0 \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "New Title"}'
//!
//! curl -X DELETE http://localhost:3000/movies/0
//!
//! curl http://localhost:3000/health
//! ```

use movie_api_server::{Config, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_tracing(&config.log_level)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    run(config).await
}
