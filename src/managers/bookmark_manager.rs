//! Bookmark Manager for Spacemarks.
//!
//! CRUD operations for bookmarks. Creation validates that the referenced
//! group exists and belongs to the requested space; moving a bookmark to a
//! group in another space re-homes its `space_id` as well.

use rusqlite::{params, Connection};

use crate::types::bookmark::{Bookmark, CreateBookmarkInput, UpdateBookmarkInput};
use crate::types::errors::BookmarkError;
use crate::types::generate_id;
use crate::types::timestamp::Timestamp;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn create_bookmark(&mut self, user_id: &str, input: CreateBookmarkInput) -> Result<Bookmark, BookmarkError>;
    fn get_bookmark(&self, id: &str) -> Result<Bookmark, BookmarkError>;
    /// Lists a user's bookmarks, optionally narrowed to one group, in display order.
    fn list_bookmarks(&self, user_id: &str, group_id: Option<&str>) -> Result<Vec<Bookmark>, BookmarkError>;
    fn update_bookmark(&mut self, id: &str, input: UpdateBookmarkInput) -> Result<Bookmark, BookmarkError>;
    fn delete_bookmark(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn reorder_bookmarks(&mut self, group_id: &str, ordered_ids: &[String]) -> Result<(), BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the space a group belongs to, or `GroupNotFound`.
    fn group_space(&self, group_id: &str) -> Result<String, BookmarkError> {
        self.conn
            .query_row(
                "SELECT space_id FROM groups WHERE id = ?1",
                params![group_id],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    BookmarkError::GroupNotFound(group_id.to_string())
                }
                other => BookmarkError::Database(other.to_string()),
            })
    }

    /// Next display position within a group (current sibling count).
    fn next_position(&self, group_id: &str) -> Result<i64, BookmarkError> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM bookmarks WHERE group_id = ?1",
                params![group_id],
                |row| row.get(0),
            )
            .map_err(|e| BookmarkError::Database(e.to_string()))
    }

    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            user_id: row.get(1)?,
            space_id: row.get(2)?,
            group_id: row.get(3)?,
            title: row.get(4)?,
            url: row.get(5)?,
            favicon_url: row.get(6)?,
            description: row.get(7)?,
            order: row.get(8)?,
            is_pinned: row.get(9)?,
            is_archived: row.get(10)?,
            created_at: Timestamp::from(row.get::<_, String>(11)?),
            updated_at: Timestamp::from(row.get::<_, String>(12)?),
        })
    }

    const COLUMNS: &'static str = "id, user_id, space_id, group_id, title, url, favicon_url, \
                                   description, position, is_pinned, is_archived, created_at, updated_at";
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    fn create_bookmark(&mut self, user_id: &str, input: CreateBookmarkInput) -> Result<Bookmark, BookmarkError> {
        let group_space = self.group_space(&input.group_id)?;
        if group_space != input.space_id {
            return Err(BookmarkError::SpaceMismatch {
                group_id: input.group_id,
                space_id: input.space_id,
            });
        }

        let now = Timestamp::now();
        let bookmark = Bookmark {
            id: generate_id("bookmark"),
            user_id: user_id.to_string(),
            space_id: input.space_id,
            group_id: input.group_id.clone(),
            title: input.title,
            url: input.url,
            favicon_url: input.favicon_url,
            description: input.description,
            order: self.next_position(&input.group_id)?,
            is_pinned: false,
            is_archived: false,
            created_at: now.clone(),
            updated_at: now,
        };

        self.conn
            .execute(
                "INSERT INTO bookmarks (id, user_id, space_id, group_id, title, url, favicon_url, \
                 description, position, is_pinned, is_archived, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    bookmark.id,
                    bookmark.user_id,
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
            .map_err(|e| BookmarkError::Database(e.to_string()))?;

        Ok(bookmark)
    }

    fn get_bookmark(&self, id: &str) -> Result<Bookmark, BookmarkError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM bookmarks WHERE id = ?1", Self::COLUMNS),
                params![id],
                Self::row_to_bookmark,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => BookmarkError::NotFound(id.to_string()),
                other => BookmarkError::Database(other.to_string()),
            })
    }

    fn list_bookmarks(&self, user_id: &str, group_id: Option<&str>) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = match group_id {
            Some(_) => self.conn.prepare(&format!(
                "SELECT {} FROM bookmarks WHERE user_id = ?1 AND group_id = ?2 ORDER BY position",
                Self::COLUMNS
            )),
            None => self.conn.prepare(&format!(
                "SELECT {} FROM bookmarks WHERE user_id = ?1 ORDER BY position",
                Self::COLUMNS
            )),
        }
        .map_err(|e| BookmarkError::Database(e.to_string()))?;

        let rows = match group_id {
            Some(gid) => stmt.query_map(params![user_id, gid], Self::row_to_bookmark),
            None => stmt.query_map(params![user_id], Self::row_to_bookmark),
        }
        .map_err(|e| BookmarkError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| BookmarkError::Database(e.to_string()))?);
        }
        Ok(results)
    }

    /// Applies a partial update and refreshes `updated_at`. Changing
    /// `group_id` moves the bookmark, appending it to the target group and
    /// adopting that group's space.
    fn update_bookmark(&mut self, id: &str, input: UpdateBookmarkInput) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.get_bookmark(id)?;

        if let Some(group_id) = input.group_id {
            if group_id != bookmark.group_id {
                bookmark.space_id = self.group_space(&group_id)?;
                bookmark.order = self.next_position(&group_id)?;
                bookmark.group_id = group_id;
            }
        }
        if let Some(title) = input.title {
            bookmark.title = title;
        }
        if let Some(url) = input.url {
            bookmark.url = url;
        }
        if let Some(favicon_url) = input.favicon_url {
            bookmark.favicon_url = favicon_url;
        }
        if let Some(description) = input.description {
            bookmark.description = description;
        }
        if let Some(order) = input.order {
            bookmark.order = order;
        }
        if let Some(is_pinned) = input.is_pinned {
            bookmark.is_pinned = is_pinned;
        }
        if let Some(is_archived) = input.is_archived {
            bookmark.is_archived = is_archived;
        }
        bookmark.updated_at = Timestamp::now();

        self.conn
            .execute(
                "UPDATE bookmarks SET space_id = ?1, group_id = ?2, title = ?3, url = ?4, \
                 favicon_url = ?5, description = ?6, position = ?7, is_pinned = ?8, \
                 is_archived = ?9, updated_at = ?10 WHERE id = ?11",
                params![
                    bookmark.space_id,
                    bookmark.group_id,
                    bookmark.title,
                    bookmark.url,
                    bookmark.favicon_url,
                    bookmark.description,
                    bookmark.order,
                    bookmark.is_pinned,
                    bookmark.is_archived,
                    bookmark.updated_at.as_str(),
                    bookmark.id,
                ],
            )
            .map_err(|e| BookmarkError::Database(e.to_string()))?;

        Ok(bookmark)
    }

    fn delete_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| BookmarkError::Database(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn reorder_bookmarks(&mut self, group_id: &str, ordered_ids: &[String]) -> Result<(), BookmarkError> {
        let now = Timestamp::now();
        for (index, id) in ordered_ids.iter().enumerate() {
            self.conn
                .execute(
                    "UPDATE bookmarks SET position = ?1, updated_at = ?2 WHERE id = ?3 AND group_id = ?4",
                    params![index as i64, now.as_str(), id, group_id],
                )
                .map_err(|e| BookmarkError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
