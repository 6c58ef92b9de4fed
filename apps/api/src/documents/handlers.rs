//! Axum route handler for document export.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::documents::content::DocumentRequest;
use crate::documents::export;
use crate::documents::render::DOCX_MIME;
use crate::errors::AppError;

/// POST /api/v1/documents/export
///
/// Body: `{"type": "resume" | "cover_letter", "content": {...}}`.
/// Responds with the `.docx` file as an attachment.
pub async fn handle_export(Json(body): Json<Value>) -> Result<impl IntoResponse, AppError> {
    let request = DocumentRequest::from_value(body)?;
    let kind = request.kind();

    let exported = tokio::task::spawn_blocking(move || {
        export(&request, chrono::Local::now().date_naive())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("document export task failed: {e}")))??;

    info!(
        "Exported {:?} document {} ({} bytes)",
        kind,
        exported.filename,
        exported.bytes.len()
    );

    let disposition = format!("attachment; filename=\"{}\"", exported.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(exported.bytes),
    ))
}
