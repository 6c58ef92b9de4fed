use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{EmploymentType, JobPostingRow, JobStatus, SalaryRange};

/// Editable fields of a posting; everything except owner and status.
#[derive(Debug, Clone)]
pub struct JobFields {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub salary: Option<SalaryRange>,
}

impl JobFields {
    fn salary_parts(&self) -> (Option<i64>, Option<i64>, Option<String>) {
        match &self.salary {
            Some(s) => (s.min, s.max, s.currency.clone()),
            None => (None, None, None),
        }
    }
}

pub async fn create_job(
    pool: &PgPool,
    company_id: Uuid,
    fields: &JobFields,
) -> Result<JobPostingRow, AppError> {
    let (salary_min, salary_max, salary_currency) = fields.salary_parts();

    let row = sqlx::query_as::<_, JobPostingRow>(
        r#"
        INSERT INTO job_postings
            (id, company_id, title, description, required_skills, location,
             employment_type, salary_min, salary_max, salary_currency, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(company_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.required_skills)
    .bind(&fields.location)
    .bind(fields.employment_type.map(|t| t.as_str()))
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .bind(JobStatus::Draft.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobPostingRow>, AppError> {
    let row = sqlx::query_as::<_, JobPostingRow>("SELECT * FROM job_postings WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Loads a posting or fails with `NotFound`.
pub async fn require_job(pool: &PgPool, job_id: Uuid) -> Result<JobPostingRow, AppError> {
    get_job(pool, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// Rewrites the editable fields only while the posting is still in `expected`.
pub async fn update_job(
    pool: &PgPool,
    job_id: Uuid,
    expected: JobStatus,
    fields: &JobFields,
) -> Result<JobPostingRow, AppError> {
    let (salary_min, salary_max, salary_currency) = fields.salary_parts();

    let row = sqlx::query_as::<_, JobPostingRow>(
        r#"
        UPDATE job_postings
        SET title = $2, description = $3, required_skills = $4, location = $5,
            employment_type = $6, salary_min = $7, salary_max = $8, salary_currency = $9,
            updated_at = NOW()
        WHERE id = $1 AND status = $10
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.required_skills)
    .bind(&fields.location)
    .bind(fields.employment_type.map(|t| t.as_str()))
    .bind(salary_min)
    .bind(salary_max)
    .bind(salary_currency)
    .bind(expected.as_str())
    .fetch_optional(pool)
    .await?;

    require_unchanged(row, job_id, expected)
}

/// Compare-and-set on the status column: writes `to` only if the row is still `from`.
pub async fn set_job_status(
    pool: &PgPool,
    job_id: Uuid,
    from: JobStatus,
    to: JobStatus,
) -> Result<JobPostingRow, AppError> {
    let row = sqlx::query_as::<_, JobPostingRow>(
        r#"
        UPDATE job_postings SET status = $2, updated_at = NOW()
        WHERE id = $1 AND status = $3
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(to.as_str())
    .bind(from.as_str())
    .fetch_optional(pool)
    .await?;

    require_unchanged(row, job_id, from)
}

/// A guarded update that matched no row means the status moved underneath us.
fn require_unchanged(
    row: Option<JobPostingRow>,
    job_id: Uuid,
    expected: JobStatus,
) -> Result<JobPostingRow, AppError> {
    row.ok_or_else(|| {
        AppError::Conflict(format!(
            "Job {job_id} is no longer '{expected}'; reload and try again"
        ))
    })
}
