/// Match scoring prompt. Replace `{profile_json}` and `{job_json}` before sending.
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = r#"Rate how well this candidate fits this job on a 0-100 scale.

Return a JSON object with this EXACT schema:
{"score": 72, "reasons": ["short reason", "short reason"]}

Candidate profile:
{profile_json}

Job posting:
{job_json}
"#;
