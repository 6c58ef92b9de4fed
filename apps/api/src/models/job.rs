use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
            EmploymentType::Temporary => "temporary",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(EmploymentType::FullTime),
            "part_time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "internship" => Ok(EmploymentType::Internship),
            "temporary" => Ok(EmploymentType::Temporary),
            other => Err(format!("unknown employment type '{other}'")),
        }
    }
}

/// Posting lifecycle. `Closed` is terminal outside of an administrative override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Published => "published",
            JobStatus::Closed => "closed",
        }
    }

    /// Validates a status change. `admin_override` lifts every rule except the same-state check.
    pub fn transition(
        self,
        to: JobStatus,
        admin_override: bool,
    ) -> Result<JobStatus, TransitionError> {
        if self == to {
            return Err(TransitionError::Unchanged(self.to_string()));
        }
        if admin_override {
            return Ok(to);
        }
        match (self, to) {
            (JobStatus::Draft, JobStatus::Published)
            | (JobStatus::Draft, JobStatus::Closed)
            | (JobStatus::Published, JobStatus::Closed) => Ok(to),
            (from, to) => Err(TransitionError::NotAllowed {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Whether the posting's fields may still be edited.
    pub fn is_editable(self, admin_override: bool) -> bool {
        admin_override || self != JobStatus::Closed
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(JobStatus::Draft),
            "published" => Ok(JobStatus::Published),
            "closed" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: Option<String>,
}

/// A job posting as seen by the matching estimator and the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub company_id: Option<Uuid>,
    #[serde(default)]
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
    #[serde(default = "default_job_status")]
    pub status: JobStatus,
}

fn default_job_status() -> JobStatus {
    JobStatus::Draft
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPostingRow {
    pub fn status(&self) -> Result<JobStatus, String> {
        self.status.parse()
    }

    pub fn into_posting(self) -> Result<JobPosting, String> {
        let status = self.status()?;
        let employment_type = self
            .employment_type
            .as_deref()
            .map(EmploymentType::from_str)
            .transpose()?;
        let salary = if self.salary_min.is_some()
            || self.salary_max.is_some()
            || self.salary_currency.is_some()
        {
            Some(SalaryRange {
                min: self.salary_min,
                max: self.salary_max,
                currency: self.salary_currency,
            })
        } else {
            None
        };

        Ok(JobPosting {
            id: Some(self.id),
            company_id: Some(self.company_id),
            title: self.title,
            description: self.description,
            required_skills: self.required_skills,
            location: self.location,
            employment_type,
            salary,
            status,
        })
    }
}
