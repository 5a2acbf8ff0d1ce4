//! Namespaced key builders for the local store.
//!
//! All per-user state lives under the fixed `bookmarks:` prefix so a user's
//! keys can be enumerated and cleared together.

/// Fixed prefix for the migration status ledger.
const MIGRATION_KEY: &str = "bookmarks:migration:status";

pub fn spaces(user_id: &str) -> String {
    format!("bookmarks:spaces:{}", user_id)
}

pub fn groups(user_id: &str) -> String {
    format!("bookmarks:groups:{}", user_id)
}

pub fn bookmarks(user_id: &str) -> String {
    format!("bookmarks:bookmarks:{}", user_id)
}

/// Migration status key for a user.
pub fn migration_status(user_id: &str) -> String {
    format!("{}:{}", MIGRATION_KEY, user_id)
}
