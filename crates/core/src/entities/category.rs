//! Package categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// A package category.
///
/// Deleting a category that still has packages referencing it is a
/// server-defined behavior; the client surfaces whatever error the API
/// returns rather than guessing a cascade policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
}
