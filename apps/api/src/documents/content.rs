//! Input records for document export and the placeholder strings used when fields are absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::profile::{non_blank, CandidateProfile, PersonalInfo};

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_HIRING_MANAGER: &str = "Hiring Manager";
pub const PRESENT_LABEL: &str = "Present";
pub const DEFAULT_FILE_STEM: &str = "document";
pub const BULLET: char = '•';
pub const CONTACT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
}

/// Cover letter: sender, target job, and four narrative paragraphs in fixed order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverLetterContent {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub job_info: JobInfo,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(default)]
    pub closing: Option<String>,
}

impl CoverLetterContent {
    /// Non-empty paragraphs in letter order.
    pub fn paragraphs(&self) -> Vec<&str> {
        [
            &self.introduction,
            &self.experience,
            &self.motivation,
            &self.closing,
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    pub fn file_suffix(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover_Letter",
        }
    }
}

/// `{"type": "resume" | "cover_letter", "content": {...}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum DocumentRequest {
    Resume(CandidateProfile),
    CoverLetter(CoverLetterContent),
}

impl DocumentRequest {
    /// Validates the envelope before any assembly happens.
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        let object = body
            .as_object()
            .ok_or_else(|| AppError::Validation("request body must be a JSON object".to_string()))?;

        for field in ["type", "content"] {
            if object.get(field).map_or(true, Value::is_null) {
                return Err(AppError::Validation(format!("'{field}' is required")));
            }
        }

        serde_json::from_value(body)
            .map_err(|e| AppError::Validation(format!("invalid document request: {e}")))
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRequest::Resume(_) => DocumentKind::Resume,
            DocumentRequest::CoverLetter(_) => DocumentKind::CoverLetter,
        }
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        match self {
            DocumentRequest::Resume(profile) => &profile.personal_info,
            DocumentRequest::CoverLetter(letter) => &letter.personal_info,
        }
    }
}
