//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from flashgen-core
pub use flashgen_core::types::GeneratedCard;

// === Database Entity Types ===

/// Flashcard row; id and created_at are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flashcard {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
}

/// One row per generation request: the topic and how many cards were saved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudySession {
    pub id: i64,
    pub topic: String,
    pub flashcards_count: i32,
    pub created_at: DateTime<Utc>,
}

// === API Request/Response Types ===

fn default_topic() -> String {
    "general".to_string()
}

fn default_num_questions() -> usize {
    5
}

/// Body of POST /api/generate-flashcards.
///
/// `text` defaults to empty so that an absent field surfaces as the same
/// invalid-input rejection as an empty one, rather than a body parse error.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateFlashcardsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateFlashcardsResponse {
    pub message: String,
    pub flashcards: Vec<GeneratedCard>,
    pub saved_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardListQuery {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardListResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudySessionListResponse {
    pub sessions: Vec<StudySession>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
