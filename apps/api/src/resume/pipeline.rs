//! Extraction pipeline: document bytes → page text → normalization →
//! schema-constrained generation → contract coercion → persistence handoff →
//! field projection.

use std::io::Write;

use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::models::{ResumeExtraction, ResumeInsights};
use crate::resume::normalize::normalize;
use crate::resume::prompts::{build_extraction_prompt, EXTRACTION_SYSTEM};
use crate::resume::validation::{coerce_extraction, is_empty_extraction};
use crate::state::AppState;

/// Runs the full pipeline for one uploaded document.
///
/// The upload is materialized to a request-scoped tempfile for the page-text
/// extractor; the handle lives on this stack frame, so the file is removed on
/// every exit path. Persistence is attempted at most once and a persistence
/// failure does not roll the extraction back.
pub async fn process_resume(
    state: &AppState,
    user_id: i64,
    data: Bytes,
    domain_hint: Option<&str>,
) -> Result<ResumeInsights, AppError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not create tempfile: {e}")))?;
    tmp.write_all(&data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not write upload: {e}")))?;

    // Text extraction is CPU-bound; keep it off the async executor.
    let extractor = state.extractor.clone();
    let path = tmp.path().to_path_buf();
    let pages = tokio::task::spawn_blocking(move || extractor.load(&path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
        .map_err(|e| AppError::DocumentUnreadable(e.to_string()))?;
    debug!("extracted {} pages for user {user_id}", pages.len());

    let text = normalize(&pages.join("\n"));

    let prompt = build_extraction_prompt(&text, domain_hint);
    let raw: Value = state
        .llm
        .call_json(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(AppError::from_generation)?;

    // An empty result is the generator saying "not a resume", a successful
    // outcome, distinct from a malformed response.
    let extraction = if is_empty_extraction(&raw) {
        info!("no resume content detected for user {user_id}");
        ResumeExtraction::empty()
    } else {
        serde_json::from_value::<ResumeExtraction>(raw)
            .map_err(|e| AppError::GenerationMalformed(e.to_string()))?
    };
    let extraction = coerce_extraction(extraction);

    let full = serde_json::to_value(&extraction)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not serialize extraction: {e}")))?;
    state
        .store
        .upsert_full_resume(user_id, &full)
        .await
        .map_err(|e| AppError::PersistenceFailed(e.to_string()))?;

    Ok(ResumeInsights::from(&extraction))
}
