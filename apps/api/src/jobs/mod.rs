// Job postings: CRUD plus the draft → published → closed lifecycle.

pub mod handlers;
pub mod repository;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobPostingRow};

/// Only the owning company may edit a posting or review its applications.
pub fn ensure_owner(job: &JobPostingRow, company_id: Uuid) -> Result<(), AppError> {
    if job.company_id == company_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

pub fn to_posting(row: JobPostingRow) -> Result<JobPosting, AppError> {
    let id = row.id;
    row.into_posting().map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Job {id} has invalid stored data: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;

    fn owned_by(company_id: Uuid) -> JobPostingRow {
        JobPostingRow {
            id: Uuid::new_v4(),
            company_id,
            title: "Product Designer".to_string(),
            description: String::new(),
            required_skills: vec!["Figma".to_string()],
            location: None,
            employment_type: None,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            status: JobStatus::Published.as_str().to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        let company = Uuid::new_v4();
        assert!(ensure_owner(&owned_by(company), company).is_ok());
    }

    #[test]
    fn test_other_company_is_forbidden() {
        let job = owned_by(Uuid::new_v4());
        assert!(matches!(
            ensure_owner(&job, Uuid::new_v4()),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_corrupt_status_is_internal_error() {
        let mut row = owned_by(Uuid::new_v4());
        row.status = "archived".to_string();
        assert!(matches!(to_posting(row), Err(AppError::Internal(_))));
    }
}
