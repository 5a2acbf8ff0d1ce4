//! Space Manager for Spacemarks.
//!
//! Implements `SpaceManagerTrait` — CRUD operations for spaces, backed by
//! SQLite via `rusqlite`. Deleting a space cascades deletion of its groups
//! and their bookmarks through the schema's foreign keys.

use rusqlite::{params, Connection};

use crate::types::errors::SpaceError;
use crate::types::generate_id;
use crate::types::space::{CreateSpaceInput, Space, UpdateSpaceInput, DEFAULT_SPACE_ICON};
use crate::types::timestamp::Timestamp;

/// Trait defining space management operations.
pub trait SpaceManagerTrait {
    fn create_space(&mut self, user_id: &str, input: CreateSpaceInput) -> Result<Space, SpaceError>;
    fn get_space(&self, id: &str) -> Result<Space, SpaceError>;
    fn list_spaces(&self, user_id: &str) -> Result<Vec<Space>, SpaceError>;
    fn update_space(&mut self, id: &str, input: UpdateSpaceInput) -> Result<Space, SpaceError>;
    fn delete_space(&mut self, id: &str) -> Result<(), SpaceError>;
    /// Assigns `order = index` for each id in the supplied display sequence.
    fn reorder_spaces(&mut self, user_id: &str, ordered_ids: &[String]) -> Result<(), SpaceError>;
}

/// Space manager backed by a SQLite connection.
pub struct SpaceManager<'a> {
    conn: &'a Connection,
}

impl<'a> SpaceManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Next display position for a user's spaces (current sibling count).
    fn next_position(&self, user_id: &str) -> Result<i64, SpaceError> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM spaces WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .map_err(|e| SpaceError::Database(e.to_string()))
    }

    fn row_to_space(row: &rusqlite::Row) -> rusqlite::Result<Space> {
        Ok(Space {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            icon: row.get(3)?,
            color: row.get(4)?,
            order: row.get(5)?,
            is_archived: row.get(6)?,
            created_at: Timestamp::from(row.get::<_, String>(7)?),
            updated_at: Timestamp::from(row.get::<_, String>(8)?),
        })
    }

    fn write_row(&self, space: &Space) -> Result<usize, SpaceError> {
        self.conn
            .execute(
                "UPDATE spaces SET name = ?1, icon = ?2, color = ?3, position = ?4, \
                 is_archived = ?5, updated_at = ?6 WHERE id = ?7",
                params![
                    space.name,
                    space.icon,
                    space.color,
                    space.order,
                    space.is_archived,
                    space.updated_at.as_str(),
                    space.id,
                ],
            )
            .map_err(|e| SpaceError::Database(e.to_string()))
    }
}

impl<'a> SpaceManagerTrait for SpaceManager<'a> {
    /// Creates a new space with a generated id, fresh timestamps, and
    /// `order` set to the user's current space count.
    fn create_space(&mut self, user_id: &str, input: CreateSpaceInput) -> Result<Space, SpaceError> {
        let now = Timestamp::now();
        let space = Space {
            id: generate_id("space"),
            user_id: user_id.to_string(),
            name: input.name,
            icon: input.icon.unwrap_or_else(|| DEFAULT_SPACE_ICON.to_string()),
            color: input.color,
            order: self.next_position(user_id)?,
            is_archived: false,
            created_at: now.clone(),
            updated_at: now,
        };

        self.conn
            .execute(
                "INSERT INTO spaces (id, user_id, name, icon, color, position, is_archived, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    space.id,
                    space.user_id,
                    space.name,
                    space.icon,
                    space.color,
                    space.order,
                    space.is_archived,
                    space.created_at.as_str(),
                    space.updated_at.as_str(),
                ],
            )
            .map_err(|e| SpaceError::Database(e.to_string()))?;

        Ok(space)
    }

    fn get_space(&self, id: &str) -> Result<Space, SpaceError> {
        self.conn
            .query_row(
                "SELECT id, user_id, name, icon, color, position, is_archived, created_at, updated_at \
                 FROM spaces WHERE id = ?1",
                params![id],
                Self::row_to_space,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => SpaceError::NotFound(id.to_string()),
                other => SpaceError::Database(other.to_string()),
            })
    }

    /// Lists a user's spaces in display order.
    fn list_spaces(&self, user_id: &str) -> Result<Vec<Space>, SpaceError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, name, icon, color, position, is_archived, created_at, updated_at \
                 FROM spaces WHERE user_id = ?1 ORDER BY position",
            )
            .map_err(|e| SpaceError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], Self::row_to_space)
            .map_err(|e| SpaceError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| SpaceError::Database(e.to_string()))?);
        }
        Ok(results)
    }

    /// Applies a partial update and refreshes `updated_at`.
    fn update_space(&mut self, id: &str, input: UpdateSpaceInput) -> Result<Space, SpaceError> {
        let mut space = self.get_space(id)?;

        if let Some(name) = input.name {
            space.name = name;
        }
        if let Some(icon) = input.icon {
            space.icon = icon;
        }
        if let Some(color) = input.color {
            space.color = color;
        }
        if let Some(order) = input.order {
            space.order = order;
        }
        if let Some(is_archived) = input.is_archived {
            space.is_archived = is_archived;
        }
        space.updated_at = Timestamp::now();

        self.write_row(&space)?;
        Ok(space)
    }

    /// Hard-deletes a space; groups and bookmarks inside it go with it.
    fn delete_space(&mut self, id: &str) -> Result<(), SpaceError> {
        let affected = self
            .conn
            .execute("DELETE FROM spaces WHERE id = ?1", params![id])
            .map_err(|e| SpaceError::Database(e.to_string()))?;

        if affected == 0 {
            return Err(SpaceError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn reorder_spaces(&mut self, user_id: &str, ordered_ids: &[String]) -> Result<(), SpaceError> {
        let now = Timestamp::now();
        for (index, id) in ordered_ids.iter().enumerate() {
            self.conn
                .execute(
                    "UPDATE spaces SET position = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                    params![index as i64, now.as_str(), id, user_id],
                )
                .map_err(|e| SpaceError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
