pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Store;
use crate::models::HealthResponse;

const SERVICE_BANNER: &str = "Study Buddy API is running";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let store = Store::new(&config.database);

    // Schema creation is idempotent. An unreachable store is not fatal:
    // read and generation paths degrade without it.
    match store.init_schema().await {
        Ok(()) => tracing::info!("Database initialized successfully"),
        Err(err) => tracing::warn!("Store unreachable at startup, skipping schema init: {}", err),
    }

    let state = AppState {
        store: Arc::new(store),
    };

    let addr = config.server.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Build the full router. Shared by `run` and the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route(
            "/api/generate-flashcards",
            post(routes::flashcards::generate),
        )
        .route("/api/flashcards", get(routes::flashcards::list))
        .route("/api/flashcards/:id", delete(routes::flashcards::remove))
        .route("/api/study-sessions", get(routes::sessions::list))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": SERVICE_BANNER,
        "endpoints": {
            "health": "/api/health",
            "generate_flashcards": "/api/generate-flashcards",
            "get_flashcards": "/api/flashcards",
            "get_study_sessions": "/api/study-sessions"
        }
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: SERVICE_BANNER.to_string(),
    })
}
