pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::documents::handlers as documents;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate profiles
        .route(
            "/api/v1/candidates/:id/profile",
            get(profiles::handle_get_profile).put(profiles::handle_save_profile),
        )
        // Job postings
        .route("/api/v1/jobs", post(jobs::handle_create_job))
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job).put(jobs::handle_update_job),
        )
        .route(
            "/api/v1/jobs/:id/status",
            patch(jobs::handle_update_job_status),
        )
        // Applications
        .route(
            "/api/v1/jobs/:id/applications",
            post(applications::handle_apply).get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_application_status),
        )
        // Matching and export (no DB access)
        .route("/api/v1/match-score", post(matching::handle_match_score))
        .route("/api/v1/documents/export", post(documents::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::documents::render::DOCX_MIME;
    use crate::matching::scorer::KeywordMatchScorer;

    /// Router backed by a pool that never connects; only DB-free routes are exercised.
    fn test_router() -> Router {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/jobboard_test")
            .unwrap();
        build_router(AppState {
            db,
            match_scorer: Arc::new(KeywordMatchScorer),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_match_score_route_uses_keyword_heuristic() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/match-score",
                json!({
                    "profile": {
                        "skills": [{"name": "React", "level": "Advanced"}],
                        "experiences": [{"position": "Frontend Developer"}]
                    },
                    "job": {
                        "title": "Frontend Developer",
                        "required_skills": ["React", "Node.js"]
                    }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let report: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(report["score"], 55);
        assert_eq!(report["scorer_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_export_returns_docx_attachment() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/documents/export",
                json!({
                    "type": "resume",
                    "content": {"personal_info": {"full_name": "Jane Doe"}}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], DOCX_MIME);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Resume.docx\""
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_export_without_type_is_bad_request() {
        let response = test_router()
            .oneshot(post_json("/api/v1/documents/export", json!({"content": {}})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
    }
}
