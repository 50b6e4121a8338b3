use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use axum_extra::extract::CookieJar;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::auth::require_session;
use crate::errors::AppError;
use crate::resume::models::ResumeInsights;
use crate::resume::pipeline::process_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub message: String,
    pub data: ResumeInsights,
    /// Wall-clock pipeline latency in seconds.
    pub processing_time: f64,
}

/// POST /resume/
///
/// Multipart upload: a required `file` part plus an optional `domain_hint`
/// text part. The session gate runs before the body is touched.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let user_id = require_session(&jar)?;
    let started = Instant::now();

    let mut file: Option<Bytes> = None;
    let mut domain_hint: Option<String> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("file") => {
                file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read uploaded file: {e}"))
                })?);
            }
            Some("domain_hint") => {
                domain_hint = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read domain_hint: {e}"))
                })?);
            }
            _ => {}
        }
    }
    let file =
        file.ok_or_else(|| AppError::Validation("a `file` part is required".to_string()))?;

    let insights = process_resume(&state, user_id, file, domain_hint.as_deref()).await?;

    let processing_time = started.elapsed().as_secs_f64();
    info!("resume processed for user {user_id} in {processing_time:.2}s");

    Ok(Json(ResumeUploadResponse {
        message: "Resume uploaded and processed successfully".to_string(),
        data: insights,
        processing_time,
    }))
}
