use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed proficiency scale for a named skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// Contact fields in display order, skipping absent or blank ones.
    pub fn contact_fields(&self) -> Vec<&str> {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.website,
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub graduation_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

/// A candidate's structured résumé data. Also the content record for résumé export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateProfileRow {
    pub candidate_id: Uuid,
    pub profile: Value,
    pub updated_at: DateTime<Utc>,
}

/// Returns the trimmed string if it is present and non-empty.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_level_defaults_to_intermediate() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Rust"}"#).unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_profile_deserializes_from_sparse_json() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"experiences": [{"company": "Acme"}]}"#).unwrap();
        assert!(profile.personal_info.full_name.is_none());
        assert_eq!(profile.experiences.len(), 1);
        assert!(profile.experiences[0].position.is_none());
        assert!(!profile.experiences[0].current);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_contact_fields_skip_blank_values() {
        let info = PersonalInfo {
            email: Some("jane@example.com".to_string()),
            phone: Some("   ".to_string()),
            location: Some(" Berlin ".to_string()),
            ..Default::default()
        };
        assert_eq!(info.contact_fields(), vec!["jane@example.com", "Berlin"]);
    }
}
