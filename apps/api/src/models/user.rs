#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row shape of the store's `users` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never returned to callers.
    pub password: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
