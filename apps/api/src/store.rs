//! Store client: remote-procedure access to the hosted relational store.
//!
//! All persistence goes through the store's REST surface: two stored
//! procedures (`get_full_candidate_profile`, `upsert_full_resume`) and the
//! plain `users` table for credentials. The client is constructed once at
//! startup; when credentials are absent it stays "unconfigured" and every
//! call fails with `StoreError::Unconfigured` while the process keeps
//! serving.

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::user::UserRow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store credentials are not configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("store returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The single store client shared by all handlers.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl StoreClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.api_key.is_some()
    }

    fn credentials(&self) -> Result<(&str, &str), StoreError> {
        match (self.base_url.as_deref(), self.api_key.as_deref()) {
            (Some(url), Some(key)) => Ok((url.trim_end_matches('/'), key)),
            _ => Err(StoreError::Unconfigured),
        }
    }

    /// Invokes a stored procedure through the REST RPC surface.
    async fn rpc(&self, procedure: &str, params: Value) -> Result<Value, StoreError> {
        let (base, key) = self.credentials()?;
        let url = format!("{base}/rest/v1/rpc/{procedure}");

        let response = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// `get_full_candidate_profile(p_user_id)`: the profile snapshot
    /// assembled server-side. `None` when the store has no data for this
    /// user.
    pub async fn get_full_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<Value>, StoreError> {
        let data = self
            .rpc("get_full_candidate_profile", json!({ "p_user_id": user_id }))
            .await?;
        match data {
            Value::Null => Ok(None),
            Value::Array(ref items) if items.is_empty() => Ok(None),
            Value::Object(ref map) if map.is_empty() => Ok(None),
            other => Ok(Some(other)),
        }
    }

    /// `upsert_full_resume(p_user_id, data)`: writes the full extraction
    /// result, inserting or replacing the candidate's stored resume.
    pub async fn upsert_full_resume(&self, user_id: i64, data: &Value) -> Result<(), StoreError> {
        self.rpc(
            "upsert_full_resume",
            json!({ "p_user_id": user_id, "data": data }),
        )
        .await?;
        debug!("resume upserted for user {user_id}");
        Ok(())
    }

    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        let (base, key) = self.credentials()?;
        let url = format!("{base}/rest/v1/users");

        let response = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(&json!({ "name": name, "email": email, "password": password_hash }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Looks up a user row by exact email. `None` when absent.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        let (base, key) = self.credentials()?;
        let url = format!("{base}/rest/v1/users");

        let response = self
            .client
            .get(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .query(&[
                ("select", "*".to_string()),
                ("email", format!("eq.{email}")),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        let mut rows: Vec<UserRow> = serde_json::from_str(&body)?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }
}
