//! Flashcard endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{
    FlashcardListQuery, FlashcardListResponse, GenerateFlashcardsRequest,
    GenerateFlashcardsResponse,
};
use crate::services::{deletion, generation, retrieval};
use crate::AppState;

/// POST /api/generate-flashcards
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateFlashcardsRequest>,
) -> Result<Json<GenerateFlashcardsResponse>> {
    let report = generation::generate(
        &state.store,
        &payload.text,
        &payload.topic,
        payload.num_questions,
    )
    .await?;

    // The message counts saved ids, not synthesized cards, so a degraded
    // store reads as "Generated 0 flashcards" while still returning them.
    Ok(Json(GenerateFlashcardsResponse {
        message: format!("Generated {} flashcards", report.saved_ids.len()),
        flashcards: report.flashcards,
        saved_ids: report.saved_ids,
    }))
}

/// GET /api/flashcards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FlashcardListQuery>,
) -> Result<Json<FlashcardListResponse>> {
    let outcome = retrieval::list_flashcards(&state.store, query.topic.as_deref()).await?;

    Ok(Json(FlashcardListResponse {
        flashcards: outcome.or_default(),
    }))
}

/// DELETE /api/flashcards/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    deletion::delete_flashcard(&state.store, id).await?;

    Ok(Json(serde_json::json!({
        "message": "Flashcard deleted successfully"
    })))
}
