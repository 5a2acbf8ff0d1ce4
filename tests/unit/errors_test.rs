//! Unit tests for error type Display formatting.
//!
//! Migration errors are shown verbatim in the UI dialog, so their messages
//! must be human-readable and non-empty.

use spacemarks::types::errors::{
    BookmarkError, GroupError, MigrationError, SpaceError, StoreError, SyncError,
};

#[test]
fn test_store_error_display() {
    let e = StoreError::Database("disk full".to_string());
    assert_eq!(e.to_string(), "Local store database error: disk full");

    let e = StoreError::Serialization("bad json".to_string());
    assert_eq!(e.to_string(), "Local store serialization error: bad json");
}

#[test]
fn test_space_error_display() {
    let e = SpaceError::NotFound("space_abc".to_string());
    assert_eq!(e.to_string(), "Space not found: space_abc");
}

#[test]
fn test_group_error_display() {
    let e = GroupError::SpaceNotFound("space_abc".to_string());
    assert_eq!(e.to_string(), "Space not found: space_abc");

    let e = GroupError::NotFound("group_abc".to_string());
    assert_eq!(e.to_string(), "Group not found: group_abc");
}

#[test]
fn test_bookmark_error_display() {
    let e = BookmarkError::SpaceMismatch {
        group_id: "group_1".to_string(),
        space_id: "space_2".to_string(),
    };
    assert_eq!(e.to_string(), "Group group_1 is not in space space_2");
}

#[test]
fn test_sync_error_display() {
    let e = SyncError::Network("connection refused".to_string());
    assert_eq!(e.to_string(), "Sync network error: connection refused");

    let e = SyncError::Api("500 Internal Server Error".to_string());
    assert_eq!(e.to_string(), "Sync API error: 500 Internal Server Error");
}

/// The dialog shows `MigrationError`'s Display output directly; it must wrap
/// the underlying cause and never be empty.
#[test]
fn test_migration_error_wraps_cause() {
    let e = MigrationError::from(SyncError::Network("timed out".to_string()));
    let msg = e.to_string();
    assert!(!msg.is_empty());
    assert!(msg.starts_with("Migration failed:"));
    assert!(msg.contains("timed out"));

    let e = MigrationError::from(StoreError::Database("locked".to_string()));
    assert!(e.to_string().contains("locked"));
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_e: &E) {}
    assert_error(&StoreError::Database(String::new()));
    assert_error(&SpaceError::NotFound(String::new()));
    assert_error(&GroupError::NotFound(String::new()));
    assert_error(&BookmarkError::NotFound(String::new()));
    assert_error(&SyncError::Network(String::new()));
    assert_error(&MigrationError::Store(StoreError::Database(String::new())));
}
