//! Axum route handlers for the resume relay.
//!
//! Both entry points share `relay_resume` and report failures the same way;
//! they differ only in how the resume text is pulled out of the request.

use axum::{
    extract::{
        rejection::{JsonRejection, StringRejection},
        State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::relay::suggest::relay_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeInput {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub ai_suggestion: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Body: `{"resume_text": "..."}`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<ResumeInput>, JsonRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let Json(input) = payload.map_err(|rejection| AppError::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    suggest(&state, &input.resume_text).await
}

/// POST /analyze_plain_text
///
/// Body: the raw resume text.
pub async fn handle_analyze_plain_text(
    State(state): State<AppState>,
    payload: Result<String, StringRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let resume_text = payload.map_err(|rejection| AppError::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    suggest(&state, &resume_text).await
}

async fn suggest(
    state: &AppState,
    resume_text: &str,
) -> Result<Json<SuggestionResponse>, AppError> {
    let ai_suggestion = relay_resume(resume_text, &state.llm).await?;
    Ok(Json(SuggestionResponse { ai_suggestion }))
}
