//! Group Manager for Spacemarks.
//!
//! CRUD operations for groups within a space. Creation validates that the
//! referenced space exists; deleting a group cascades deletion of its
//! bookmarks through the schema's foreign keys.

use rusqlite::{params, Connection};

use crate::types::errors::GroupError;
use crate::types::generate_id;
use crate::types::group::{CreateGroupInput, Group, UpdateGroupInput};
use crate::types::timestamp::Timestamp;

/// Trait defining group management operations.
pub trait GroupManagerTrait {
    fn create_group(&mut self, user_id: &str, input: CreateGroupInput) -> Result<Group, GroupError>;
    fn get_group(&self, id: &str) -> Result<Group, GroupError>;
    /// Lists a user's groups, optionally narrowed to one space, in display order.
    fn list_groups(&self, user_id: &str, space_id: Option<&str>) -> Result<Vec<Group>, GroupError>;
    fn update_group(&mut self, id: &str, input: UpdateGroupInput) -> Result<Group, GroupError>;
    fn delete_group(&mut self, id: &str) -> Result<(), GroupError>;
    fn reorder_groups(&mut self, space_id: &str, ordered_ids: &[String]) -> Result<(), GroupError>;
}

/// Group manager backed by a SQLite connection.
pub struct GroupManager<'a> {
    conn: &'a Connection,
}

impl<'a> GroupManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn space_exists(&self, space_id: &str) -> Result<bool, GroupError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM spaces WHERE id = ?1",
                params![space_id],
                |row| row.get(0),
            )
            .map_err(|e| GroupError::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Next display position within a space (current sibling count).
    fn next_position(&self, space_id: &str) -> Result<i64, GroupError> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM groups WHERE space_id = ?1",
                params![space_id],
                |row| row.get(0),
            )
            .map_err(|e| GroupError::Database(e.to_string()))
    }

    fn row_to_group(row: &rusqlite::Row) -> rusqlite::Result<Group> {
        Ok(Group {
            id: row.get(0)?,
            user_id: row.get(1)?,
            space_id: row.get(2)?,
            name: row.get(3)?,
            icon: row.get(4)?,
            order: row.get(5)?,
            is_archived: row.get(6)?,
            created_at: Timestamp::from(row.get::<_, String>(7)?),
            updated_at: Timestamp::from(row.get::<_, String>(8)?),
        })
    }
}

impl<'a> GroupManagerTrait for GroupManager<'a> {
    fn create_group(&mut self, user_id: &str, input: CreateGroupInput) -> Result<Group, GroupError> {
        if !self.space_exists(&input.space_id)? {
            return Err(GroupError::SpaceNotFound(input.space_id));
        }

        let now = Timestamp::now();
        let group = Group {
            id: generate_id("group"),
            user_id: user_id.to_string(),
            space_id: input.space_id.clone(),
            name: input.name,
            icon: input.icon,
            order: self.next_position(&input.space_id)?,
            is_archived: false,
            created_at: now.clone(),
            updated_at: now,
        };

        self.conn
            .execute(
                "INSERT INTO groups (id, user_id, space_id, name, icon, position, is_archived, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    group.id,
                    group.user_id,
                    group.space_id,
                    group.name,
                    group.icon,
                    group.order,
                    group.is_archived,
                    group.created_at.as_str(),
                    group.updated_at.as_str(),
                ],
            )
            .map_err(|e| GroupError::Database(e.to_string()))?;

        Ok(group)
    }

    fn get_group(&self, id: &str) -> Result<Group, GroupError> {
        self.conn
            .query_row(
                "SELECT id, user_id, space_id, name, icon, position, is_archived, created_at, updated_at \
                 FROM groups WHERE id = ?1",
                params![id],
                Self::row_to_group,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => GroupError::NotFound(id.to_string()),
                other => GroupError::Database(other.to_string()),
            })
    }

    fn list_groups(&self, user_id: &str, space_id: Option<&str>) -> Result<Vec<Group>, GroupError> {
        let mut stmt = match space_id {
            Some(_) => self.conn.prepare(
                "SELECT id, user_id, space_id, name, icon, position, is_archived, created_at, updated_at \
                 FROM groups WHERE user_id = ?1 AND space_id = ?2 ORDER BY position",
            ),
            None => self.conn.prepare(
                "SELECT id, user_id, space_id, name, icon, position, is_archived, created_at, updated_at \
                 FROM groups WHERE user_id = ?1 ORDER BY position",
            ),
        }
        .map_err(|e| GroupError::Database(e.to_string()))?;

        let rows = match space_id {
            Some(sid) => stmt.query_map(params![user_id, sid], Self::row_to_group),
            None => stmt.query_map(params![user_id], Self::row_to_group),
        }
        .map_err(|e| GroupError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| GroupError::Database(e.to_string()))?);
        }
        Ok(results)
    }

    /// Applies a partial update and refreshes `updated_at`.
    fn update_group(&mut self, id: &str, input: UpdateGroupInput) -> Result<Group, GroupError> {
        let mut group = self.get_group(id)?;

        if let Some(name) = input.name {
            group.name = name;
        }
        if let Some(icon) = input.icon {
            group.icon = icon;
        }
        if let Some(order) = input.order {
            group.order = order;
        }
        if let Some(is_archived) = input.is_archived {
            group.is_archived = is_archived;
        }
        group.updated_at = Timestamp::now();

        self.conn
            .execute(
                "UPDATE groups SET name = ?1, icon = ?2, position = ?3, is_archived = ?4, updated_at = ?5 \
                 WHERE id = ?6",
                params![
                    group.name,
                    group.icon,
                    group.order,
                    group.is_archived,
                    group.updated_at.as_str(),
                    group.id,
                ],
            )
            .map_err(|e| GroupError::Database(e.to_string()))?;

        Ok(group)
    }

    /// Hard-deletes a group; its bookmarks go with it.
    fn delete_group(&mut self, id: &str) -> Result<(), GroupError> {
        let affected = self
            .conn
            .execute("DELETE FROM groups WHERE id = ?1", params![id])
            .map_err(|e| GroupError::Database(e.to_string()))?;

        if affected == 0 {
            return Err(GroupError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn reorder_groups(&mut self, space_id: &str, ordered_ids: &[String]) -> Result<(), GroupError> {
        let now = Timestamp::now();
        for (index, id) in ordered_ids.iter().enumerate() {
            self.conn
                .execute(
                    "UPDATE groups SET position = ?1, updated_at = ?2 WHERE id = ?3 AND space_id = ?4",
                    params![index as i64, now.as_str(), id, space_id],
                )
                .map_err(|e| GroupError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
