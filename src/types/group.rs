use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Mid-level container within a space, holds bookmarks.
///
/// Deleting the owning space cascades deletion of its groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub user_id: String,
    pub space_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub order: i64,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a group. `space_id` must reference an existing space.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupInput {
    pub space_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Partial update for a group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<Option<String>>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_archived: Option<bool>,
}
