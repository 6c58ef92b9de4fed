//! Pluggable, trait-based match scoring of a candidate profile against a job posting.
//!
//! `LlmMatchScorer` is the primary path when an API key is configured; it falls back to
//! `KeywordMatchScorer` whenever the LLM is unavailable or its reply does not parse.
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup from config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::matching::estimator::{estimate_match_score, match_reasons};
use crate::matching::prompts::MATCH_SCORE_PROMPT_TEMPLATE;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;

pub const KEYWORD_BACKEND: &str = "keyword";
pub const LLM_BACKEND: &str = "llm";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u8, // 0 – 100
    pub reasons: Vec<String>,
    pub scorer_backend: String,
}

#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<MatchReport, AppError>;
}

/// Deterministic keyword/role-family heuristic. No I/O.
pub struct KeywordMatchScorer;

impl KeywordMatchScorer {
    pub fn report(profile: &CandidateProfile, job: &JobPosting) -> MatchReport {
        MatchReport {
            score: estimate_match_score(profile, job),
            reasons: match_reasons(profile, job),
            scorer_backend: KEYWORD_BACKEND.to_string(),
        }
    }
}

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<MatchReport, AppError> {
        Ok(Self::report(profile, job))
    }
}

/// Shape the LLM is asked to return.
#[derive(Debug, Deserialize)]
struct LlmMatchReply {
    score: f64,
    #[serde(default)]
    reasons: Vec<String>,
}

pub struct LlmMatchScorer {
    llm: LlmClient,
}

impl LlmMatchScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn ask(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<MatchReport, LlmError> {
        let prompt = MATCH_SCORE_PROMPT_TEMPLATE
            .replace(
                "{profile_json}",
                &serde_json::to_string_pretty(&without_contact_details(profile))?,
            )
            .replace("{job_json}", &serde_json::to_string_pretty(job)?);

        let reply: LlmMatchReply = self.llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
        Ok(report_from_reply(reply))
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(
        &self,
        profile: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<MatchReport, AppError> {
        if !self.llm.is_enabled() {
            debug!("LLM client disabled, scoring with keywords");
            return Ok(KeywordMatchScorer::report(profile, job));
        }

        match self.ask(profile, job).await {
            Ok(report) => {
                debug!("LLM match score: {}", report.score);
                Ok(report)
            }
            Err(e) => {
                warn!("LLM match scoring unavailable, using keyword fallback: {e}");
                Ok(KeywordMatchScorer::report(profile, job))
            }
        }
    }
}

/// Copy of the profile safe to send to the LLM provider: identity and contact fields cleared.
fn without_contact_details(profile: &CandidateProfile) -> CandidateProfile {
    let mut redacted = profile.clone();
    let info = &mut redacted.personal_info;
    info.full_name = None;
    info.email = None;
    info.phone = None;
    info.location = None;
    info.linkedin = None;
    info.website = None;
    redacted
}

fn report_from_reply(reply: LlmMatchReply) -> MatchReport {
    let score = if reply.score.is_finite() {
        reply.score.clamp(0.0, 100.0).round() as u8
    } else {
        0
    };
    let reasons = reply
        .reasons
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    MatchReport {
        score,
        reasons,
        scorer_backend: LLM_BACKEND.to_string(),
    }
}
