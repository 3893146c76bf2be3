//! Blog, catalog, news, and information posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdminUserId, PostId, PostStatus, PostType};

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub admin_id: Option<AdminUserId>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "type", default)]
    pub post_type: PostType,
    #[serde(default)]
    pub status: PostStatus,
    /// Ordered list of attached image URLs.
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a post. Attached image files travel separately as
/// multipart parts, not in this struct.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub post_type: PostType,
    pub status: PostStatus,
}

/// Partial update for a post; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub post_type: Option<PostType>,
    pub status: Option<PostStatus>,
}
