use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplicationRow};

pub struct NewApplication<'a> {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub resume_ref: &'a str,
    pub cover_letter_ref: Option<&'a str>,
    pub matching_score: Option<u8>,
}

pub async fn find_application(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<Option<JobApplicationRow>, AppError> {
    let row = sqlx::query_as::<_, JobApplicationRow>(
        "SELECT * FROM job_applications WHERE candidate_id = $1 AND job_id = $2",
    )
    .bind(candidate_id)
    .bind(job_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Inserts a `new` application. A concurrent duplicate surfaces as `Conflict`
/// through the `(candidate_id, job_id)` unique constraint.
pub async fn insert_application(
    pool: &PgPool,
    application: NewApplication<'_>,
) -> Result<JobApplicationRow, AppError> {
    sqlx::query_as::<_, JobApplicationRow>(
        r#"
        INSERT INTO job_applications
            (id, candidate_id, job_id, resume_ref, cover_letter_ref, status, matching_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(application.candidate_id)
    .bind(application.job_id)
    .bind(application.resume_ref)
    .bind(application.cover_letter_ref)
    .bind(ApplicationStatus::New.as_str())
    .bind(application.matching_score.map(i16::from))
    .fetch_one(pool)
    .await
    .map_err(|e| {
        AppError::from_insert(
            e,
            duplicate_message(application.candidate_id, application.job_id),
        )
    })
}

pub async fn require_application(
    pool: &PgPool,
    application_id: Uuid,
) -> Result<JobApplicationRow, AppError> {
    sqlx::query_as::<_, JobApplicationRow>("SELECT * FROM job_applications WHERE id = $1")
        .bind(application_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))
}

pub async fn list_for_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<JobApplicationRow>, AppError> {
    let rows = sqlx::query_as::<_, JobApplicationRow>(
        r#"
        SELECT * FROM job_applications
        WHERE job_id = $1
        ORDER BY matching_score DESC NULLS LAST, created_at
        "#,
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Compare-and-set on the status column. Two reviewers racing from the same state
/// cannot both win; the loser gets `Conflict`.
pub async fn set_application_status(
    pool: &PgPool,
    application_id: Uuid,
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> Result<JobApplicationRow, AppError> {
    let row = sqlx::query_as::<_, JobApplicationRow>(
        r#"
        UPDATE job_applications SET status = $2, updated_at = NOW()
        WHERE id = $1 AND status = $3
        RETURNING *
        "#,
    )
    .bind(application_id)
    .bind(to.as_str())
    .bind(from.as_str())
    .fetch_optional(pool)
    .await?;

    row.ok_or_else(|| stale_status(application_id, from))
}

fn stale_status(application_id: Uuid, expected: ApplicationStatus) -> AppError {
    AppError::Conflict(format!(
        "Application {application_id} is no longer '{expected}'; reload and try again"
    ))
}

pub fn duplicate_message(candidate_id: Uuid, job_id: Uuid) -> String {
    format!("Candidate {candidate_id} has already applied to job {job_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_status_is_conflict() {
        let err = stale_status(Uuid::nil(), ApplicationStatus::New);
        match err {
            AppError::Conflict(msg) => assert!(msg.contains("'new'")),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_message_names_both_ids() {
        let candidate = Uuid::new_v4();
        let job = Uuid::new_v4();
        let msg = duplicate_message(candidate, job);
        assert!(msg.contains(&candidate.to_string()));
        assert!(msg.contains(&job.to_string()));
    }
}
