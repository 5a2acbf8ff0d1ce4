//! Server-side sync service.
//!
//! Implements the remote API surface consumed by the migration flow:
//! `sync.status` (data presence), `sync.pull` (canonical state for a
//! principal), and `sync.push` (atomic batch upsert of all three
//! collections). The caller supplies a pre-verified principal id; identity
//! checks live upstream.

use rusqlite::{params, Connection};

use crate::types::errors::SyncError;
use crate::types::sync::{SyncBatch, SyncBookmark, SyncGroup, SyncSpace, SyncStatus};
use crate::types::timestamp::Timestamp;

/// Whether the principal has any server-side data in any collection.
pub fn status(conn: &Connection, user_id: &str) -> Result<SyncStatus, SyncError> {
    let count: i64 = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM spaces WHERE user_id = ?1) \
               + (SELECT COUNT(*) FROM groups WHERE user_id = ?1) \
               + (SELECT COUNT(*) FROM bookmarks WHERE user_id = ?1)",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;

    Ok(SyncStatus {
        has_server_data: count > 0,
    })
}

/// Fetches the canonical server state for a principal, each collection in
/// display order.
pub fn pull(conn: &Connection, user_id: &str) -> Result<SyncBatch, SyncError> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, icon, color, position, is_archived, created_at, updated_at \
             FROM spaces WHERE user_id = ?1 ORDER BY position",
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    let spaces = collect(stmt.query_map(params![user_id], |row| {
        Ok(SyncSpace {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
            color: row.get(3)?,
            order: row.get(4)?,
            is_archived: row.get(5)?,
            created_at: Timestamp::from(row.get::<_, String>(6)?),
            updated_at: Timestamp::from(row.get::<_, String>(7)?),
        })
    }))?;

    let mut stmt = conn
        .prepare(
            "SELECT id, space_id, name, icon, position, is_archived, created_at, updated_at \
             FROM groups WHERE user_id = ?1 ORDER BY position",
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    let groups = collect(stmt.query_map(params![user_id], |row| {
        Ok(SyncGroup {
            id: row.get(0)?,
            space_id: row.get(1)?,
            name: row.get(2)?,
            icon: row.get(3)?,
            order: row.get(4)?,
            is_archived: row.get(5)?,
            created_at: Timestamp::from(row.get::<_, String>(6)?),
            updated_at: Timestamp::from(row.get::<_, String>(7)?),
        })
    }))?;

    let mut stmt = conn
        .prepare(
            "SELECT id, space_id, group_id, title, url, favicon_url, description, position, \
             is_pinned, is_archived, created_at, updated_at \
             FROM bookmarks WHERE user_id = ?1 ORDER BY position",
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    let bookmarks = collect(stmt.query_map(params![user_id], |row| {
        Ok(SyncBookmark {
            id: row.get(0)?,
            space_id: row.get(1)?,
            group_id: row.get(2)?,
            title: row.get(3)?,
            url: row.get(4)?,
            favicon_url: row.get(5)?,
            description: row.get(6)?,
            order: row.get(7)?,
            is_pinned: row.get(8)?,
            is_archived: row.get(9)?,
            created_at: Timestamp::from(row.get::<_, String>(10)?),
            updated_at: Timestamp::from(row.get::<_, String>(11)?),
        })
    }))?;

    Ok(SyncBatch {
        spaces,
        groups,
        bookmarks,
    })
}

/// Upserts a whole batch for a principal inside one transaction.
///
/// Rows are written in referential order (spaces, then groups, then
/// bookmarks) so a bookmark may reference a group created in the same call.
/// Conflicts resolve by id: the incoming row replaces the stored one. Any
/// failure rolls the entire batch back.
pub fn push(conn: &Connection, user_id: &str, batch: &SyncBatch) -> Result<(), SyncError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| SyncError::Database(e.to_string()))?;

    for space in &batch.spaces {
        tx.execute(
            "INSERT INTO spaces (id, user_id, name, icon, color, position, is_archived, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             ON CONFLICT(id) DO UPDATE SET user_id = ?2, name = ?3, icon = ?4, color = ?5, \
             position = ?6, is_archived = ?7, created_at = ?8, updated_at = ?9",
            params![
                space.id,
                user_id,
                space.name,
                space.icon,
                space.color,
                space.order,
                space.is_archived,
                space.created_at.as_str(),
                space.updated_at.as_str(),
            ],
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    }

    for group in &batch.groups {
        tx.execute(
            "INSERT INTO groups (id, user_id, space_id, name, icon, position, is_archived, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             ON CONFLICT(id) DO UPDATE SET user_id = ?2, space_id = ?3, name = ?4, icon = ?5, \
             position = ?6, is_archived = ?7, created_at = ?8, updated_at = ?9",
            params![
                group.id,
                user_id,
                group.space_id,
                group.name,
                group.icon,
                group.order,
                group.is_archived,
                group.created_at.as_str(),
                group.updated_at.as_str(),
            ],
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    }

    for bookmark in &batch.bookmarks {
        tx.execute(
            "INSERT INTO bookmarks (id, user_id, space_id, group_id, title, url, favicon_url, \
             description, position, is_pinned, is_archived, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13) \
             ON CONFLICT(id) DO UPDATE SET user_id = ?2, space_id = ?3, group_id = ?4, title = ?5, \
             url = ?6, favicon_url = ?7, description = ?8, position = ?9, is_pinned = ?10, \
             is_archived = ?11, created_at = ?12, updated_at = ?13",
            params![
                bookmark.id,
                user_id,
                bookmark.space_id,
                bookmark.group_id,
                bookmark.title,
                bookmark.url,
                bookmark.favicon_url,
                bookmark.description,
                bookmark.order,
                bookmark.is_pinned,
                bookmark.is_archived,
                bookmark.created_at.as_str(),
                bookmark.updated_at.as_str(),
            ],
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;
    }

    tx.commit().map_err(|e| SyncError::Database(e.to_string()))
}

fn collect<T>(
    rows: rusqlite::Result<rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row) -> rusqlite::Result<T>>>,
) -> Result<Vec<T>, SyncError> {
    let rows = rows.map_err(|e| SyncError::Database(e.to_string()))?;
    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| SyncError::Database(e.to_string()))?);
    }
    Ok(results)
}
