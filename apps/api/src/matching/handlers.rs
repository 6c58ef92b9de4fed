//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::scorer::MatchReport;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub profile: CandidateProfile,
    pub job: JobPosting,
}

/// POST /api/v1/match-score
///
/// Scores an inline profile against an inline job posting without touching the DB.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = state
        .match_scorer
        .score(&request.profile, &request.job)
        .await?;
    Ok(Json(report))
}
