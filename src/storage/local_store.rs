//! Per-user key-value store backed by its own SQLite file.
//!
//! Values are JSON documents — whole collections are stored under one key
//! each, so reads and writes are per-collection, not per-entity. Missing
//! keys read back as absent, never as an error.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;
use crate::types::group::Group;
use crate::types::space::Space;

use super::keys;

/// All three collections for one user. Missing collections are empty, never
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData {
    pub spaces: Vec<Space>,
    pub groups: Vec<Group>,
    pub bookmarks: Vec<Bookmark>,
}

impl UserData {
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty() && self.groups.is_empty() && self.bookmarks.is_empty()
    }
}

/// Local key-value store. Stands in for the browser-side cache; one logical
/// owner (the current session) accesses it at a time.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (or creates) the store at the given file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store, discarded on drop. Used by tests and the
    /// demo binary.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv_store (
                     key TEXT PRIMARY KEY,
                     value TEXT NOT NULL,
                     updated_at INTEGER NOT NULL
                 );",
            )
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads the raw JSON value stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Stores a raw JSON value under `key`, replacing any previous value.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    /// Reads and deserializes the value under `key`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// Serializes and stores `value` under `key`.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.put_raw(key, &raw)
    }

    /// Loads all three collections for a user. Missing collections come back
    /// as empty vectors.
    pub fn load_user_data(&self, user_id: &str) -> Result<UserData, StoreError> {
        let spaces = self.get_json(&keys::spaces(user_id))?.unwrap_or_default();
        let groups = self.get_json(&keys::groups(user_id))?.unwrap_or_default();
        let bookmarks = self.get_json(&keys::bookmarks(user_id))?.unwrap_or_default();
        Ok(UserData {
            spaces,
            groups,
            bookmarks,
        })
    }

    /// Stores all three collections for a user, replacing previous contents.
    pub fn store_user_data(&self, user_id: &str, data: &UserData) -> Result<(), StoreError> {
        self.put_json(&keys::spaces(user_id), &data.spaces)?;
        self.put_json(&keys::groups(user_id), &data.groups)?;
        self.put_json(&keys::bookmarks(user_id), &data.bookmarks)?;
        Ok(())
    }

    /// Removes all three collection keys for a user. The migration ledger
    /// key is deliberately left alone.
    pub fn clear_user_data(&self, user_id: &str) -> Result<(), StoreError> {
        self.delete(&keys::spaces(user_id))?;
        self.delete(&keys::groups(user_id))?;
        self.delete(&keys::bookmarks(user_id))?;
        Ok(())
    }
}
