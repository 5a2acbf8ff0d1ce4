//! Wire types for the sync API.
//!
//! These mirror the entities minus `user_id` — the server derives the owner
//! from the authenticated principal, so the field never crosses the wire.
//! All other fields (ids, timestamps, order, flags) round-trip unchanged.

use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;
use super::group::Group;
use super::space::Space;
use super::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSpace {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
    pub order: i64,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncGroup {
    pub id: String,
    pub space_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub order: i64,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncBookmark {
    pub id: String,
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

/// One push/pull payload: all three collections together, so the server can
/// satisfy referential ordering within a single call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncBatch {
    pub spaces: Vec<SyncSpace>,
    pub groups: Vec<SyncGroup>,
    pub bookmarks: Vec<SyncBookmark>,
}

impl SyncBatch {
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty() && self.groups.is_empty() && self.bookmarks.is_empty()
    }
}

/// Response of the `sync.status` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub has_server_data: bool,
}

impl Space {
    /// Wire representation with `user_id` stripped.
    pub fn to_sync(&self) -> SyncSpace {
        SyncSpace {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            order: self.order,
            is_archived: self.is_archived,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }

    /// Rebuilds the local entity from a wire row, attaching the owner.
    pub fn from_sync(s: SyncSpace, user_id: &str) -> Space {
        Space {
            id: s.id,
            user_id: user_id.to_string(),
            name: s.name,
            icon: s.icon,
            color: s.color,
            order: s.order,
            is_archived: s.is_archived,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl Group {
    pub fn to_sync(&self) -> SyncGroup {
        SyncGroup {
            id: self.id.clone(),
            space_id: self.space_id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            order: self.order,
            is_archived: self.is_archived,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }

    pub fn from_sync(g: SyncGroup, user_id: &str) -> Group {
        Group {
            id: g.id,
            user_id: user_id.to_string(),
            space_id: g.space_id,
            name: g.name,
            icon: g.icon,
            order: g.order,
            is_archived: g.is_archived,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

impl Bookmark {
    pub fn to_sync(&self) -> SyncBookmark {
        SyncBookmark {
            id: self.id.clone(),
            space_id: self.space_id.clone(),
            group_id: self.group_id.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            favicon_url: self.favicon_url.clone(),
            description: self.description.clone(),
            order: self.order,
            is_pinned: self.is_pinned,
            is_archived: self.is_archived,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }

    pub fn from_sync(b: SyncBookmark, user_id: &str) -> Bookmark {
        Bookmark {
            id: b.id,
            user_id: user_id.to_string(),
            space_id: b.space_id,
            group_id: b.group_id,
            title: b.title,
            url: b.url,
            favicon_url: b.favicon_url,
            description: b.description,
            order: b.order,
            is_pinned: b.is_pinned,
            is_archived: b.is_archived,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
