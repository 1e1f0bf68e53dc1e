//! Flashcard generation: synthesize cards from text, persist them, and
//! record a study session summary.

use flashgen_core::{synthesize, GeneratedCard};

use crate::db::Store;
use crate::error::{ApiError, Result};

/// How the persistence step of one generation request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Every synthesized card was stored and a session row recorded.
    Complete,
    /// The store failed mid-batch; only a prefix of the cards was stored.
    Partial,
    /// No store connection could be opened; nothing was persisted.
    Unavailable,
}

/// Result of one generation request.
#[derive(Debug)]
pub struct GenerationReport {
    pub flashcards: Vec<GeneratedCard>,
    pub saved_ids: Vec<i64>,
    pub persistence: PersistOutcome,
}

/// Generate cards from `text` and persist them under `topic`.
///
/// Store failures never fail this path: the caller still receives the
/// generated cards, with `saved_ids` reflecting what actually landed. The
/// session row is written after the card batch and records the saved count,
/// not the synthesized count.
pub async fn generate(
    store: &Store,
    text: &str,
    topic: &str,
    num_questions: usize,
) -> Result<GenerationReport> {
    if text.is_empty() {
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }

    let flashcards = synthesize(text, num_questions);

    let mut conn = match store.connect().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("Store unavailable, returning unsaved flashcards: {}", err);
            return Ok(GenerationReport {
                flashcards,
                saved_ids: Vec::new(),
                persistence: PersistOutcome::Unavailable,
            });
        }
    };

    let mut saved_ids = Vec::with_capacity(flashcards.len());
    let mut persistence = PersistOutcome::Complete;
    for card in &flashcards {
        match conn
            .insert_flashcard(&card.question, &card.answer, topic)
            .await
        {
            Ok(id) => saved_ids.push(id),
            Err(err) => {
                tracing::warn!(
                    "Flashcard insert failed after {} of {}: {}",
                    saved_ids.len(),
                    flashcards.len(),
                    err
                );
                persistence = PersistOutcome::Partial;
                break;
            }
        }
    }

    if let Err(err) = conn.insert_session(topic, saved_ids.len() as i32).await {
        tracing::warn!("Study session insert failed: {}", err);
    }

    Ok(GenerationReport {
        flashcards,
        saved_ids,
        persistence,
    })
}
