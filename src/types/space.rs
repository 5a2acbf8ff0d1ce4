use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Default icon assigned when a space is created without one.
pub const DEFAULT_SPACE_ICON: &str = "📁";

/// Top-level grouping container owned by a user.
///
/// `order` values sort ascending to define display sequence; they need not
/// be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
    pub order: i64,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a space.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceInput {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update for a space. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpaceInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<Option<String>>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_archived: Option<bool>,
}
