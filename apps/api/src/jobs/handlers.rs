//! Axum route handlers for job postings.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::repository::{create_job, require_job, set_job_status, update_job, JobFields};
use crate::jobs::{ensure_owner, to_posting};
use crate::models::job::{EmploymentType, JobPosting, JobPostingRow, JobStatus, SalaryRange};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobFieldsRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company_id: Uuid,
    #[serde(flatten)]
    pub fields: JobFieldsRequest,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub company_id: Uuid,
    #[serde(default)]
    pub admin_override: bool,
    #[serde(flatten)]
    pub fields: JobFieldsRequest,
}

#[derive(Debug, Deserialize)]
pub struct JobStatusRequest {
    pub company_id: Uuid,
    pub status: JobStatus,
    #[serde(default)]
    pub admin_override: bool,
}

/// Trims and checks request fields before they reach the DB.
fn validate_fields(request: JobFieldsRequest) -> Result<JobFields, AppError> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if let Some(SalaryRange {
        min: Some(min),
        max: Some(max),
        ..
    }) = &request.salary
    {
        if min > max {
            return Err(AppError::Validation(
                "salary.min cannot exceed salary.max".to_string(),
            ));
        }
    }

    let required_skills = request
        .required_skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(JobFields {
        title,
        description: request.description,
        required_skills,
        location: request.location,
        employment_type: request.employment_type,
        salary: request.salary,
    })
}

/// Owner check plus the closed-is-final rule. Returns the status the edit was checked against.
/// `admin_override` lifts the lifecycle rule, never the ownership check.
fn check_editable(
    existing: &JobPostingRow,
    company_id: Uuid,
    admin_override: bool,
) -> Result<JobStatus, AppError> {
    ensure_owner(existing, company_id)?;
    let status = stored_status(existing)?;
    if !status.is_editable(admin_override) {
        return Err(AppError::Validation(format!(
            "Job {} is closed and can no longer be edited",
            existing.id
        )));
    }
    Ok(status)
}

fn check_transition(
    existing: &JobPostingRow,
    request: &JobStatusRequest,
) -> Result<(JobStatus, JobStatus), AppError> {
    ensure_owner(existing, request.company_id)?;
    let from = stored_status(existing)?;
    let to = from.transition(request.status, request.admin_override)?;
    Ok((from, to))
}

fn stored_status(row: &JobPostingRow) -> Result<JobStatus, AppError> {
    row.status().map_err(|e| AppError::Internal(anyhow::anyhow!(e)))
}

/// POST /api/v1/jobs
///
/// Creates a posting in `draft`.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<JobPosting>, AppError> {
    let fields = validate_fields(request.fields)?;
    let row = create_job(&state.db, request.company_id, &fields).await?;
    info!("Company {} created job {}", row.company_id, row.id);
    Ok(Json(to_posting(row)?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    let row = require_job(&state.db, job_id).await?;
    Ok(Json(to_posting(row)?))
}

/// PUT /api/v1/jobs/:id
///
/// Replaces the editable fields. Closed postings are immutable unless `admin_override` is set.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Json<JobPosting>, AppError> {
    let existing = require_job(&state.db, job_id).await?;
    let status = check_editable(&existing, request.company_id, request.admin_override)?;

    let fields = validate_fields(request.fields)?;
    let row = update_job(&state.db, job_id, status, &fields).await?;
    Ok(Json(to_posting(row)?))
}

/// PATCH /api/v1/jobs/:id/status
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<JobStatusRequest>,
) -> Result<Json<JobPosting>, AppError> {
    let existing = require_job(&state.db, job_id).await?;
    let (from, to) = check_transition(&existing, &request)?;

    let row = set_job_status(&state.db, job_id, from, to).await?;
    info!(
        "Job {job_id}: {from} → {to}{}",
        if request.admin_override { " (admin override)" } else { "" }
    );
    Ok(Json(to_posting(row)?))
}
