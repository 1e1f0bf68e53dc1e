//! Study session endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StudySessionListResponse;
use crate::services::retrieval;
use crate::AppState;

/// GET /api/study-sessions
pub async fn list(State(state): State<AppState>) -> Result<Json<StudySessionListResponse>> {
    let outcome = retrieval::list_sessions(&state.store).await?;

    Ok(Json(StudySessionListResponse {
        sessions: outcome.or_default(),
    }))
}
