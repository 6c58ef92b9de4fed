use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, CandidateProfileRow};

/// Upserts the candidate's profile. Single-user editing: last save wins.
pub async fn save_profile(
    pool: &PgPool,
    candidate_id: Uuid,
    profile: &CandidateProfile,
) -> Result<CandidateProfileRow, AppError> {
    let data = serde_json::to_value(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    let row = sqlx::query_as::<_, CandidateProfileRow>(
        r#"
        INSERT INTO candidate_profiles (candidate_id, profile, updated_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (candidate_id)
        DO UPDATE SET profile = EXCLUDED.profile, updated_at = NOW()
        RETURNING candidate_id, profile, updated_at
        "#,
    )
    .bind(candidate_id)
    .bind(&data)
    .fetch_one(pool)
    .await?;

    info!(
        "Saved profile for candidate {candidate_id} ({} experiences, {} skills)",
        profile.experiences.len(),
        profile.skills.len()
    );
    Ok(row)
}

pub async fn get_profile(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Option<CandidateProfile>, AppError> {
    let row = sqlx::query_as::<_, CandidateProfileRow>(
        "SELECT candidate_id, profile, updated_at FROM candidate_profiles WHERE candidate_id = $1",
    )
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?;

    row.map(|r| decode_profile(r.profile)).transpose()
}

fn decode_profile(value: serde_json::Value) -> Result<CandidateProfile, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored profile is malformed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_profile_accepts_stored_shape() {
        let profile = decode_profile(json!({
            "personal_info": {"full_name": "Ada"},
            "skills": [{"name": "Rust", "level": "Expert"}]
        }))
        .unwrap();
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn test_decode_profile_rejects_wrong_shape() {
        assert!(matches!(
            decode_profile(json!({"skills": "Rust"})),
            Err(AppError::Internal(_))
        ));
    }
}
