//! Axum route handlers for candidate profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::profiles::repository::{get_profile, save_profile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedProfileResponse {
    pub candidate_id: Uuid,
    pub updated_at: DateTime<Utc>,
}

/// PUT /api/v1/candidates/:id/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<SavedProfileResponse>, AppError> {
    let row = save_profile(&state.db, candidate_id, &profile).await?;
    Ok(Json(SavedProfileResponse {
        candidate_id: row.candidate_id,
        updated_at: row.updated_at,
    }))
}

/// GET /api/v1/candidates/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<CandidateProfile>, AppError> {
    get_profile(&state.db, candidate_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("Profile for candidate {candidate_id} not found"))
        })
}
