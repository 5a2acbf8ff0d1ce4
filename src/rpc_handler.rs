//! RPC method handler for the Spacemarks JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! appropriate managers and services via the `App` struct.
//!
//! Every method operating on user data takes a `userId` param — an opaque,
//! pre-verified principal id. Identity verification lives upstream; a
//! missing id is a caller contract violation and is rejected as such.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::group_manager::{GroupManager, GroupManagerTrait};
use crate::managers::space_manager::{SpaceManager, SpaceManagerTrait};
use crate::services::{seed_service, sync_service};
use crate::types::migration::MigrationChoice;
use crate::types::sync::SyncBatch;

use serde_json::{json, Value};

fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn string_list(params: &Value, key: &str) -> Result<Vec<String>, String> {
    params
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .ok_or_else(|| format!("missing {}", key))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Spaces ───
        "space.create" => {
            let user_id = require_str(params, "userId")?;
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = SpaceManager::new(a.db.connection());
            let space = mgr.create_space(user_id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(space).map_err(|e| e.to_string())
        }
        "space.list" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = SpaceManager::new(a.db.connection());
            let spaces = mgr.list_spaces(user_id).map_err(|e| e.to_string())?;
            serde_json::to_value(spaces).map_err(|e| e.to_string())
        }
        "space.update" => {
            let id = require_str(params, "id")?;
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = SpaceManager::new(a.db.connection());
            let space = mgr.update_space(id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(space).map_err(|e| e.to_string())
        }
        "space.delete" => {
            let id = require_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = SpaceManager::new(a.db.connection());
            mgr.delete_space(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "space.reorder" => {
            let user_id = require_str(params, "userId")?;
            let ids = string_list(params, "ids")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = SpaceManager::new(a.db.connection());
            mgr.reorder_spaces(user_id, &ids).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Groups ───
        "group.create" => {
            let user_id = require_str(params, "userId")?;
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = GroupManager::new(a.db.connection());
            let group = mgr.create_group(user_id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(group).map_err(|e| e.to_string())
        }
        "group.list" => {
            let user_id = require_str(params, "userId")?;
            let space_id = params.get("spaceId").and_then(|v| v.as_str());
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = GroupManager::new(a.db.connection());
            let groups = mgr.list_groups(user_id, space_id).map_err(|e| e.to_string())?;
            serde_json::to_value(groups).map_err(|e| e.to_string())
        }
        "group.update" => {
            let id = require_str(params, "id")?;
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = GroupManager::new(a.db.connection());
            let group = mgr.update_group(id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(group).map_err(|e| e.to_string())
        }
        "group.delete" => {
            let id = require_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = GroupManager::new(a.db.connection());
            mgr.delete_group(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "group.reorder" => {
            let space_id = require_str(params, "spaceId")?;
            let ids = string_list(params, "ids")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = GroupManager::new(a.db.connection());
            mgr.reorder_groups(space_id, &ids).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.create" => {
            let user_id = require_str(params, "userId")?;
            let url = require_str(params, "url")?;
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("invalid url: must start with http:// or https://".to_string());
            }
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            let bookmark = mgr.create_bookmark(user_id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.list" => {
            let user_id = require_str(params, "userId")?;
            let group_id = params.get("groupId").and_then(|v| v.as_str());
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = BookmarkManager::new(a.db.connection());
            let bookmarks = mgr.list_bookmarks(user_id, group_id).map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.update" => {
            let id = require_str(params, "id")?;
            let input = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            let bookmark = mgr.update_bookmark(id, input).map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.delete" => {
            let id = require_str(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            mgr.delete_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.reorder" => {
            let group_id = require_str(params, "groupId")?;
            let ids = string_list(params, "ids")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = BookmarkManager::new(a.db.connection());
            mgr.reorder_bookmarks(group_id, &ids).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Sync ───
        "sync.status" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let status = sync_service::status(a.db.connection(), user_id).map_err(|e| e.to_string())?;
            serde_json::to_value(status).map_err(|e| e.to_string())
        }
        "sync.pull" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let batch = sync_service::pull(a.db.connection(), user_id).map_err(|e| e.to_string())?;
            serde_json::to_value(batch).map_err(|e| e.to_string())
        }
        "sync.push" => {
            let user_id = require_str(params, "userId")?;
            let batch: SyncBatch = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            sync_service::push(a.db.connection(), user_id, &batch).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Migration ───
        "migration.check" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let svc = a.migration_service(user_id);
            let state = a
                .block_on(svc.check_migration_state(user_id))
                .map_err(|e| e.to_string())?;
            serde_json::to_value(state).map_err(|e| e.to_string())
        }
        "migration.shouldShowDialog" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let svc = a.migration_service(user_id);
            let show = a
                .block_on(svc.should_show_dialog(user_id))
                .map_err(|e| e.to_string())?;
            Ok(json!({"show": show}))
        }
        "migration.execute" => {
            let user_id = require_str(params, "userId")?;
            let choice = require_str(params, "choice")?;
            let choice = MigrationChoice::parse(choice)
                .ok_or_else(|| format!("invalid choice: {}", choice))?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let svc = a.migration_service(user_id);
            a.block_on(svc.execute(user_id, choice)).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "migration.skip" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let svc = a.migration_service(user_id);
            svc.skip(user_id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "migration.pull" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let svc = a.migration_service(user_id);
            let data = a.block_on(svc.pull_to_cache(user_id)).map_err(|e| e.to_string())?;
            Ok(json!({
                "spaces": data.spaces.len(),
                "groups": data.groups.len(),
                "bookmarks": data.bookmarks.len(),
            }))
        }

        // ─── Seed ───
        "seed.local" => {
            let user_id = require_str(params, "userId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let seeded = seed_service::seed_local(&a.local, user_id).map_err(|e| e.to_string())?;
            Ok(json!({"seeded": seeded}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
