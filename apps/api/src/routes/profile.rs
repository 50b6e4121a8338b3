use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::auth::require_session;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /profile
///
/// Returns the full candidate profile assembled by the store procedure.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Value>, AppError> {
    let user_id = require_session(&jar)?;

    let profile = state
        .store
        .get_full_candidate_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile found for user {user_id}")))?;

    Ok(Json(json!({ "success": true, "data": profile })))
}
