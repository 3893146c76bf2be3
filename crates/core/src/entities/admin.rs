//! Back-office admin accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdminRole, AdminUserId};

/// An admin account as returned by the API. Passwords never come back over
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for registering a new admin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDraft {
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

/// Partial update for an admin; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
