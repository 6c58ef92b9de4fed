//! Axum route handlers for job applications.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::applications::repository::{
    duplicate_message, find_application, insert_application, list_for_job, require_application,
    set_application_status, NewApplication,
};
use crate::errors::AppError;
use crate::jobs::repository::require_job;
use crate::jobs::{ensure_owner, to_posting};
use crate::models::application::{ApplicationStatus, JobApplicationRow};
use crate::models::job::JobStatus;
use crate::profiles::repository::get_profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub candidate_id: Uuid,
    pub resume_ref: String,
    #[serde(default)]
    pub cover_letter_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    pub company_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationStatusRequest {
    pub company_id: Uuid,
    pub status: ApplicationStatus,
}

/// POST /api/v1/jobs/:id/applications
///
/// Only published jobs accept applications. The matching score is computed from the
/// candidate's saved profile when one exists.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<JobApplicationRow>, AppError> {
    let resume_ref = request.resume_ref.trim();
    if resume_ref.is_empty() {
        return Err(AppError::Validation("resume_ref cannot be empty".to_string()));
    }

    let job = to_posting(require_job(&state.db, job_id).await?)?;
    if job.status != JobStatus::Published {
        return Err(AppError::Validation(format!(
            "Job {job_id} is not accepting applications (status: {})",
            job.status
        )));
    }

    if find_application(&state.db, request.candidate_id, job_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(duplicate_message(
            request.candidate_id,
            job_id,
        )));
    }

    let matching_score = match get_profile(&state.db, request.candidate_id).await? {
        Some(profile) => Some(state.match_scorer.score(&profile, &job).await?.score),
        None => {
            warn!(
                "Candidate {} has no saved profile; applying without a matching score",
                request.candidate_id
            );
            None
        }
    };

    let cover_letter_ref = request
        .cover_letter_ref
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    let row = insert_application(
        &state.db,
        NewApplication {
            candidate_id: request.candidate_id,
            job_id,
            resume_ref,
            cover_letter_ref,
            matching_score,
        },
    )
    .await?;

    info!(
        "Candidate {} applied to job {job_id} (score: {:?})",
        request.candidate_id, matching_score
    );
    Ok(Json(row))
}

/// GET /api/v1/jobs/:id/applications?company_id=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<Vec<JobApplicationRow>>, AppError> {
    let job = require_job(&state.db, job_id).await?;
    ensure_owner(&job, query.company_id)?;
    Ok(Json(list_for_job(&state.db, job_id).await?))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
    Json(request): Json<ApplicationStatusRequest>,
) -> Result<Json<JobApplicationRow>, AppError> {
    let application = require_application(&state.db, application_id).await?;
    let job = require_job(&state.db, application.job_id).await?;
    ensure_owner(&job, request.company_id)?;

    let from = application
        .status()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    let to = from.transition(request.status)?;

    let row = set_application_status(&state.db, application_id, from, to).await?;
    info!("Application {application_id}: {from} → {to}");
    Ok(Json(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_request_cover_letter_is_optional() {
        let request: ApplyRequest = serde_json::from_value(json!({
            "candidate_id": Uuid::nil(),
            "resume_ref": "resumes/abc.pdf"
        }))
        .unwrap();
        assert!(request.cover_letter_ref.is_none());
    }

    #[test]
    fn test_status_request_parses_snake_case_status() {
        let request: ApplicationStatusRequest = serde_json::from_value(json!({
            "company_id": Uuid::nil(),
            "status": "shortlisted"
        }))
        .unwrap();
        assert_eq!(request.status, ApplicationStatus::Shortlisted);
    }
}
