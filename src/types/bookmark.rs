use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Leaf entity representing a saved URL.
///
/// `group_id` must reference an existing group within the same space.
/// Deleting the owning group cascades deletion of its bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub space_id: String,
    pub group_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i64,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a bookmark.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkInput {
    pub space_id: String,
    pub group_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for a bookmark.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkInput {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<Option<String>>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
    #[serde(default)]
    pub is_archived: Option<bool>,
}
