use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::TransitionError;

/// Review state of an application. `Rejected` and `Hired` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    Shortlisted,
    Waitlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Waitlisted => "waitlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }

    pub fn transition(self, to: ApplicationStatus) -> Result<ApplicationStatus, TransitionError> {
        use ApplicationStatus::*;

        if self == to {
            return Err(TransitionError::Unchanged(self.to_string()));
        }
        let allowed = !self.is_terminal() && (self == New || to != New);
        if allowed {
            Ok(to)
        } else {
            Err(TransitionError::NotAllowed {
                from: self.to_string(),
                to: to.to_string(),
            })
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ApplicationStatus::New),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "waitlisted" => Ok(ApplicationStatus::Waitlisted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "hired" => Ok(ApplicationStatus::Hired),
            other => Err(format!("unknown application status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub resume_ref: String,
    pub cover_letter_ref: Option<String>,
    pub status: String,
    /// 0 – 100 when present.
    pub matching_score: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobApplicationRow {
    pub fn status(&self) -> Result<ApplicationStatus, String> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_application_can_move_anywhere() {
        for to in [
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Waitlisted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Hired,
        ] {
            assert_eq!(ApplicationStatus::New.transition(to), Ok(to));
        }
    }

    #[test]
    fn test_shortlisted_cannot_go_back_to_new() {
        assert!(ApplicationStatus::Shortlisted
            .transition(ApplicationStatus::New)
            .is_err());
    }

    #[test]
    fn test_waitlisted_can_be_shortlisted() {
        assert_eq!(
            ApplicationStatus::Waitlisted.transition(ApplicationStatus::Shortlisted),
            Ok(ApplicationStatus::Shortlisted)
        );
    }

    #[test]
    fn test_terminal_states_reject_changes() {
        assert!(ApplicationStatus::Hired.is_terminal());
        assert!(ApplicationStatus::Rejected
            .transition(ApplicationStatus::Shortlisted)
            .is_err());
        assert!(ApplicationStatus::Hired
            .transition(ApplicationStatus::Rejected)
            .is_err());
    }

    #[test]
    fn test_status_round_trips_through_storage_string() {
        let status: ApplicationStatus = "waitlisted".parse().unwrap();
        assert_eq!(status.as_str(), "waitlisted");
        assert!("archived".parse::<ApplicationStatus>().is_err());
    }
}
