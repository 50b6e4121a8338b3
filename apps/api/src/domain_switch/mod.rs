//! Domain-switch advisory: fetch the stored profile snapshot, ask the
//! generator for a structured transition analysis, return it verbatim.
//! Read-and-advise only, no persistence side effect.

pub mod models;
pub mod prompts;

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::require_session;
use crate::errors::AppError;
use crate::state::AppState;

use self::models::DomainSwitchAnalysis;
use self::prompts::{build_domain_switch_prompt, DOMAIN_SWITCH_SYSTEM};

#[derive(Debug, Deserialize)]
pub struct DomainSwitchRequest {
    #[serde(default)]
    pub target_domain: String,
}

pub async fn analyze(
    state: &AppState,
    user_id: i64,
    target_domain: &str,
) -> Result<DomainSwitchAnalysis, AppError> {
    let profile = state
        .store
        .get_full_candidate_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile found for user {user_id}")))?;

    let prompt = build_domain_switch_prompt(&profile, target_domain);
    state
        .llm
        .call_json::<DomainSwitchAnalysis>(&prompt, DOMAIN_SWITCH_SYSTEM)
        .await
        .map_err(AppError::from_generation)
}

/// POST /domain_switch
pub async fn handle_domain_switch(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<DomainSwitchRequest>,
) -> Result<Json<DomainSwitchAnalysis>, AppError> {
    let user_id = require_session(&jar)?;
    if request.target_domain.trim().is_empty() {
        return Err(AppError::Validation(
            "target_domain cannot be empty".to_string(),
        ));
    }

    let analysis = analyze(&state, user_id, request.target_domain.trim()).await?;
    Ok(Json(analysis))
}
