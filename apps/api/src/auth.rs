//! Credential check and session-cookie issuance.
//!
//! A session is a single HTTP-only `user_id` cookie. Every gated handler
//! calls `require_session` before touching any external collaborator.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "user_id";

/// Resolves the caller's identity from the session cookie.
pub fn require_session(jar: &CookieJar) -> Result<i64, AppError> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<i64>().ok())
        .ok_or(AppError::Unauthorized)
}

fn session_cookie(user_id: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::Validation(
            "Name, email and password are required".to_string(),
        ));
    }

    // bcrypt is CPU-bound; keep it off the async executor.
    let password = request.password.clone();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("hashing task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;

    state
        .store
        .insert_user(request.name.trim(), request.email.trim(), &hashed)
        .await?;

    info!("registered user {}", request.email.trim());
    Ok(Json(json!({ "message": "Registration successful" })))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = state
        .store
        .find_user_by_email(request.email.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    let password = request.password.clone();
    let hash = user.password.clone();
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("verification task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password verification failed: {e}")))?;
    if !verified {
        return Err(AppError::Unauthorized);
    }

    info!("user {} logged in", user.id);
    Ok((
        jar.add(session_cookie(user.id)),
        Json(json!({ "message": "Login successful" })),
    ))
}

/// POST /logout
pub async fn handle_logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    (
        jar.remove(removal),
        Json(json!({ "message": "Logout successful" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cookie_is_unauthorized() {
        let jar = CookieJar::new();
        assert!(matches!(require_session(&jar), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_malformed_cookie_is_unauthorized() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-number"));
        assert!(matches!(require_session(&jar), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_valid_cookie_resolves_identity() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "42"));
        assert_eq!(require_session(&jar).unwrap(), 42);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(7);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "7");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
