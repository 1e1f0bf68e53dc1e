//! MySQL store access.
//!
//! There is no pooling and no retry: every operation opens one connection
//! through [`Store::connect`] and releases it when the [`StoreConn`] drops,
//! on every exit path. Connection failures are returned as raw
//! [`sqlx::Error`] so each caller can apply its own degradation policy;
//! errors after a successful connect convert into [`crate::error::ApiError`].

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{Flashcard, StudySession};

/// Connection provider for the relational store.
#[derive(Clone)]
pub struct Store {
    options: MySqlConnectOptions,
}

impl Store {
    /// Build a store from configuration. No connection is opened here.
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        Self { options }
    }

    /// Open a fresh connection to the store.
    pub async fn connect(&self) -> std::result::Result<StoreConn, sqlx::Error> {
        let conn = MySqlConnection::connect_with(&self.options).await?;
        Ok(StoreConn { conn })
    }

    /// Create the flashcards and study_sessions tables if absent.
    pub async fn init_schema(&self) -> std::result::Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS flashcards (
                id INT AUTO_INCREMENT PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                topic VARCHAR(255) NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&mut conn.conn)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS study_sessions (
                id INT AUTO_INCREMENT PRIMARY KEY,
                topic VARCHAR(255) NOT NULL,
                flashcards_count INT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&mut conn.conn)
        .await?;

        Ok(())
    }
}

/// A single live store connection.
///
/// Dropping it closes the underlying connection.
pub struct StoreConn {
    conn: MySqlConnection,
}

impl StoreConn {
    /// The underlying connection, for ad-hoc statements in tests.
    pub fn connection(&mut self) -> &mut MySqlConnection {
        &mut self.conn
    }

    // === Flashcard Repository ===

    /// Insert one flashcard, returning the store-assigned id.
    pub async fn insert_flashcard(
        &mut self,
        question: &str,
        answer: &str,
        topic: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO flashcards (question, answer, topic)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(topic)
        .execute(&mut self.conn)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    /// Get all flashcards newest-first, optionally filtered by exact topic.
    pub async fn list_flashcards(&mut self, topic: Option<&str>) -> Result<Vec<Flashcard>> {
        let flashcards = match topic {
            Some(topic) => {
                sqlx::query_as::<_, Flashcard>(
                    r#"
                    SELECT id, question, answer, topic, created_at
                    FROM flashcards
                    WHERE topic = ?
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(topic)
                .fetch_all(&mut self.conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, Flashcard>(
                    r#"
                    SELECT id, question, answer, topic, created_at
                    FROM flashcards
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&mut self.conn)
                .await?
            }
        };

        Ok(flashcards)
    }

    /// Delete a flashcard by id.
    ///
    /// Absent ids are not distinguished from present ones; the affected-row
    /// count is ignored.
    pub async fn delete_flashcard(&mut self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM flashcards
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }

    // === Study Session Repository ===

    /// Insert one study session summary row, returning its id.
    pub async fn insert_session(&mut self, topic: &str, flashcards_count: i32) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO study_sessions (topic, flashcards_count)
            VALUES (?, ?)
            "#,
        )
        .bind(topic)
        .bind(flashcards_count)
        .execute(&mut self.conn)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    /// Get all study sessions, newest first.
    pub async fn list_sessions(&mut self) -> Result<Vec<StudySession>> {
        let sessions = sqlx::query_as::<_, StudySession>(
            r#"
            SELECT id, topic, flashcards_count, created_at
            FROM study_sessions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut self.conn)
        .await?;

        Ok(sessions)
    }
}
