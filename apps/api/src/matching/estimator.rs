//! Keyword matching estimator: the deterministic fallback score between a profile and a job.
//!
//! Three capped components:
//! 1. Skills (≤ 50): share of required skills covered by candidate skills, where a candidate
//!    skill covers a requirement when either lower-cased string contains the other.
//! 2. Experience (≤ 30): 30 points if any position shares a role-family keyword with the title.
//! 3. Education (≤ 20): 20 points if any field of study maps onto the job title's family.
//!
//! Final score is `round(min(100, skills + experience + education))`.

use serde::Serialize;

use crate::models::job::JobPosting;
use crate::models::profile::{non_blank, CandidateProfile};

const MAX_SKILL_SCORE: f64 = 50.0;
const EXPERIENCE_MATCH_POINTS: f64 = 30.0;
const EDUCATION_MATCH_POINTS: f64 = 20.0;
const MAX_TOTAL_SCORE: f64 = 100.0;
const MAX_REASON_SKILLS: usize = 3;

/// Keywords that must appear in both a prior position and the job title to count as experience.
const ROLE_FAMILIES: &[&str] = &["developer", "engineer", "manager", "designer", "analyst"];

struct EducationRule {
    field_keywords: &'static [&'static str],
    title_keywords: &'static [&'static str],
}

const EDUCATION_RULES: &[EducationRule] = &[
    EducationRule {
        field_keywords: &["computer", "software", "engineering"],
        title_keywords: &["developer", "engineer"],
    },
    EducationRule {
        field_keywords: &["design"],
        title_keywords: &["designer"],
    },
    EducationRule {
        field_keywords: &["business", "management"],
        title_keywords: &["manager"],
    },
    EducationRule {
        field_keywords: &["data", "statistics"],
        title_keywords: &["analyst"],
    },
];

/// Per-component contributions before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        (self.skills + self.experience + self.education)
            .clamp(0.0, MAX_TOTAL_SCORE)
            .round() as u8
    }
}

/// Scores a candidate against a job posting. Always in `0..=100`.
pub fn estimate_match_score(profile: &CandidateProfile, job: &JobPosting) -> u8 {
    score_breakdown(profile, job).total()
}

pub fn score_breakdown(profile: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
    let title = job.title.to_lowercase();

    ScoreBreakdown {
        skills: skill_score(profile, job),
        experience: experience_score(profile, &title),
        education: education_score(profile, &title),
    }
}

/// Short display sentences explaining the score. Stable for identical input.
pub fn match_reasons(profile: &CandidateProfile, job: &JobPosting) -> Vec<String> {
    let mut reasons = Vec::new();

    let overlap = skill_overlap(profile, job);
    if !overlap.is_empty() {
        let named: Vec<&str> = overlap.into_iter().take(MAX_REASON_SKILLS).collect();
        reasons.push(format!(
            "Your skills in {} match this job's requirements.",
            named.join(", ")
        ));
    }

    let title = job.title.to_lowercase();
    let relevant = profile.experiences.iter().find_map(|exp| {
        let position = non_blank(&exp.position)?;
        shared_role_family(&position.to_lowercase(), &title).map(|_| position)
    });
    if let Some(position) = relevant {
        reasons.push(format!(
            "Your experience as {position} is relevant to this role."
        ));
    }

    reasons
}

/// Candidate skills (original casing, profile order) that cover at least one requirement.
fn skill_overlap<'a>(profile: &'a CandidateProfile, job: &JobPosting) -> Vec<&'a str> {
    let required: Vec<String> = job
        .required_skills
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();

    profile
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| {
            let name = name.to_lowercase();
            required
                .iter()
                .any(|req| req.contains(&name) || name.contains(req.as_str()))
        })
        .collect()
}

fn skill_score(profile: &CandidateProfile, job: &JobPosting) -> f64 {
    let required_count = job
        .required_skills
        .iter()
        .filter(|r| !r.trim().is_empty())
        .count();
    if required_count == 0 {
        return 0.0;
    }

    let overlap = skill_overlap(profile, job).len();
    (MAX_SKILL_SCORE * overlap as f64 / required_count as f64).min(MAX_SKILL_SCORE)
}

fn experience_score(profile: &CandidateProfile, title: &str) -> f64 {
    let matches = profile
        .experiences
        .iter()
        .filter(|exp| {
            let position = exp.position.as_deref().unwrap_or_default().to_lowercase();
            shared_role_family(&position, title).is_some()
        })
        .count();

    (matches as f64 * EXPERIENCE_MATCH_POINTS).min(EXPERIENCE_MATCH_POINTS)
}

fn education_score(profile: &CandidateProfile, title: &str) -> f64 {
    let matches = profile
        .education
        .iter()
        .filter(|edu| {
            let field = edu.field.as_deref().unwrap_or_default().to_lowercase();
            EDUCATION_RULES.iter().any(|rule| {
                rule.field_keywords.iter().any(|k| field.contains(k))
                    && rule.title_keywords.iter().any(|k| title.contains(k))
            })
        })
        .count();

    (matches as f64 * EDUCATION_MATCH_POINTS).min(EDUCATION_MATCH_POINTS)
}

fn shared_role_family(position: &str, title: &str) -> Option<&'static str> {
    ROLE_FAMILIES
        .iter()
        .copied()
        .find(|k| position.contains(k) && title.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;
    use crate::models::profile::{Education, Skill, SkillLevel, WorkExperience};

    fn job(title: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            id: None,
            company_id: None,
            title: title.to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            location: None,
            employment_type: None,
            salary: None,
            status: JobStatus::Published,
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level: SkillLevel::Advanced,
        }
    }

    fn experience(position: &str) -> WorkExperience {
        WorkExperience {
            position: Some(position.to_string()),
            ..Default::default()
        }
    }

    fn education(field: &str) -> Education {
        Education {
            field: Some(field.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_react_frontend_developer_scores_55() {
        let profile = CandidateProfile {
            skills: vec![skill("React")],
            experiences: vec![experience("Frontend Developer")],
            education: vec![education("History")],
            ..Default::default()
        };
        let job = job("Frontend Developer", &["React", "Node.js"]);

        let breakdown = score_breakdown(&profile, &job);
        assert_eq!(breakdown.skills, 25.0);
        assert_eq!(breakdown.experience, 30.0);
        assert_eq!(breakdown.education, 0.0);
        assert_eq!(estimate_match_score(&profile, &job), 55);
    }

    #[test]
    fn test_no_required_skills_contributes_zero() {
        let profile = CandidateProfile {
            skills: vec![skill("Rust"), skill("SQL")],
            ..Default::default()
        };
        let job = job("Backend Engineer", &[]);

        assert_eq!(score_breakdown(&profile, &job).skills, 0.0);
        assert_eq!(estimate_match_score(&profile, &job), 0);
    }

    #[test]
    fn test_blank_requirements_count_as_none() {
        let profile = CandidateProfile {
            skills: vec![skill("Rust")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&profile, &job("Engineer", &["", "  "])).skills, 0.0);
    }

    #[test]
    fn test_substring_match_works_both_ways() {
        let profile = CandidateProfile {
            skills: vec![skill("JavaScript"), skill("PostgreSQL")],
            ..Default::default()
        };
        // "java" ⊂ "javascript", "postgresql" ⊃ "sql"
        let job = job("Developer", &["Java", "SQL"]);
        assert_eq!(score_breakdown(&profile, &job).skills, 50.0);
    }

    #[test]
    fn test_empty_skill_name_never_matches() {
        let profile = CandidateProfile {
            skills: vec![skill("")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&profile, &job("Developer", &["Go"])).skills, 0.0);
    }

    #[test]
    fn test_skill_score_capped_at_50() {
        let profile = CandidateProfile {
            skills: vec![skill("C"), skill("C++"), skill("C#")],
            ..Default::default()
        };
        let job = job("Developer", &["C"]);
        assert_eq!(score_breakdown(&profile, &job).skills, 50.0);
    }

    #[test]
    fn test_experience_capped_at_30_for_many_matches() {
        let profile = CandidateProfile {
            experiences: vec![
                experience("Software Engineer"),
                experience("Senior Engineer"),
                experience("Staff Engineer"),
            ],
            ..Default::default()
        };
        assert_eq!(
            score_breakdown(&profile, &job("Platform Engineer", &[])).experience,
            30.0
        );
    }

    #[test]
    fn test_experience_requires_same_family_in_both() {
        let profile = CandidateProfile {
            experiences: vec![experience("Product Manager")],
            ..Default::default()
        };
        assert_eq!(
            score_breakdown(&profile, &job("Frontend Developer", &[])).experience,
            0.0
        );
    }

    #[test]
    fn test_missing_position_and_field_do_not_panic() {
        let profile = CandidateProfile {
            experiences: vec![WorkExperience::default()],
            education: vec![Education::default()],
            ..Default::default()
        };
        assert_eq!(estimate_match_score(&profile, &job("Developer", &["Rust"])), 0);
    }

    #[test]
    fn test_education_rules() {
        let cs = CandidateProfile {
            education: vec![education("Computer Science"), education("Software Engineering")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&cs, &job("Backend Developer", &[])).education, 20.0);

        let design = CandidateProfile {
            education: vec![education("Graphic Design")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&design, &job("UX Designer", &[])).education, 20.0);

        let business = CandidateProfile {
            education: vec![education("Business Administration")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&business, &job("Project Manager", &[])).education, 20.0);

        let data = CandidateProfile {
            education: vec![education("Data Science")],
            ..Default::default()
        };
        assert_eq!(score_breakdown(&data, &job("Data Analyst", &[])).education, 20.0);
        // Kept as-is: data fields only map onto analyst titles.
        assert_eq!(score_breakdown(&data, &job("Data Engineer", &[])).education, 0.0);
    }

    #[test]
    fn test_full_match_is_capped_at_100() {
        let profile = CandidateProfile {
            skills: vec![skill("Rust"), skill("Go")],
            experiences: vec![experience("Backend Engineer")],
            education: vec![education("Computer Engineering")],
            ..Default::default()
        };
        let score = estimate_match_score(&profile, &job("Backend Engineer", &["Rust", "Go"]));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_fractional_skill_score_rounds() {
        let profile = CandidateProfile {
            skills: vec![skill("Rust")],
            ..Default::default()
        };
        // 50 / 3 = 16.67 → 17
        assert_eq!(estimate_match_score(&profile, &job("Role", &["Rust", "Go", "Zig"])), 17);
    }

    #[test]
    fn test_reasons_name_at_most_three_skills() {
        let profile = CandidateProfile {
            skills: vec![skill("Rust"), skill("Go"), skill("SQL"), skill("Kafka")],
            experiences: vec![experience("Intern"), experience("Backend Engineer")],
            ..Default::default()
        };
        let job = job("Senior Engineer", &["Rust", "Go", "SQL", "Kafka"]);

        let reasons = match_reasons(&profile, &job);
        assert_eq!(reasons.len(), 2);
        assert_eq!(
            reasons[0],
            "Your skills in Rust, Go, SQL match this job's requirements."
        );
        assert_eq!(
            reasons[1],
            "Your experience as Backend Engineer is relevant to this role."
        );
        assert_eq!(reasons, match_reasons(&profile, &job));
    }

    #[test]
    fn test_reasons_empty_when_nothing_matches() {
        let reasons = match_reasons(&CandidateProfile::default(), &job("Designer", &["Figma"]));
        assert!(reasons.is_empty());
    }
}
