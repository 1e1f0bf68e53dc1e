//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the router against a real or unreachable store
//! - Helper functions for creating and cleaning up test data
//!
//! # Requirements
//! DB-backed tests require a MySQL database reachable through the MYSQL_*
//! environment variables. Degraded-mode tests run anywhere.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use study_buddy_backend::config::{Config, DatabaseConfig};
use study_buddy_backend::db::Store;
use study_buddy_backend::{app, AppState};

/// Test context containing the store and the full application router.
pub struct TestContext {
    pub store: Arc<Store>,
    app: Router,
}

impl TestContext {
    /// Create a context against the configured MySQL database, with the
    /// schema applied.
    ///
    /// # Panics
    /// Panics if the database is unreachable.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let config = Config::from_env();
        let store = Store::new(&config.database);

        store
            .init_schema()
            .await
            .expect("Failed to initialize test database schema (set MYSQL_* env vars)");

        Self::from_store(store)
    }

    /// Create a context whose store points at an address nothing listens on.
    ///
    /// Every connection attempt fails immediately, which drives the
    /// degraded-store paths without needing a database.
    pub fn unreachable() -> Self {
        let database = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: "study_buddy_test".to_string(),
            port: 1,
        };

        Self::from_store(Store::new(&database))
    }

    fn from_store(store: Store) -> Self {
        let store = Arc::new(store);
        let state = AppState {
            store: store.clone(),
        };

        Self {
            app: app(state),
            store,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Remove all rows created under a test topic.
    ///
    /// Call this after DB-backed tests to remove test data.
    pub async fn cleanup_topic(&self, topic: &str) {
        let Ok(mut conn) = self.store.connect().await else {
            return;
        };

        let _ = sqlx::query("DELETE FROM flashcards WHERE topic = ?")
            .bind(topic)
            .execute(conn.connection())
            .await;

        let _ = sqlx::query("DELETE FROM study_sessions WHERE topic = ?")
            .bind(topic)
            .execute(conn.connection())
            .await;
    }
}
