//! Unit tests for the local key-value store.

use spacemarks::services::seed_service;
use spacemarks::storage::{keys, LocalStore};

#[test]
fn test_get_missing_key_returns_none() {
    let store = LocalStore::open_in_memory().unwrap();
    assert!(store.get_raw("bookmarks:spaces:nobody").unwrap().is_none());
}

#[test]
fn test_put_and_get_raw_roundtrip() {
    let store = LocalStore::open_in_memory().unwrap();
    store.put_raw("k", "[1,2,3]").unwrap();
    assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("[1,2,3]"));

    // Overwrite replaces
    store.put_raw("k", "[]").unwrap();
    assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_delete_is_idempotent() {
    let store = LocalStore::open_in_memory().unwrap();
    store.put_raw("k", "1").unwrap();
    store.delete("k").unwrap();
    assert!(store.get_raw("k").unwrap().is_none());
    // Deleting an absent key is not an error
    store.delete("k").unwrap();
}

#[test]
fn test_get_json_on_corrupt_value_is_serialization_error() {
    let store = LocalStore::open_in_memory().unwrap();
    store.put_raw("k", "not json").unwrap();
    let err = store.get_json::<Vec<i32>>("k").unwrap_err();
    assert!(err.to_string().contains("serialization"));
}

/// Missing collections read back as empty vectors, never as an error.
#[test]
fn test_load_user_data_absent_is_empty() {
    let store = LocalStore::open_in_memory().unwrap();
    let data = store.load_user_data("user_1").unwrap();
    assert!(data.is_empty());
    assert!(data.spaces.is_empty());
    assert!(data.groups.is_empty());
    assert!(data.bookmarks.is_empty());
}

#[test]
fn test_store_and_load_user_data() {
    let store = LocalStore::open_in_memory().unwrap();
    let data = seed_service::create_seed_data("user_1");

    store.store_user_data("user_1", &data).unwrap();
    let loaded = store.load_user_data("user_1").unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn test_user_data_is_namespaced_per_user() {
    let store = LocalStore::open_in_memory().unwrap();
    let data = seed_service::create_seed_data("user_a");
    store.store_user_data("user_a", &data).unwrap();

    assert!(store.load_user_data("user_b").unwrap().is_empty());
}

/// `clear_user_data` removes the three collections but leaves the migration
/// ledger key alone.
#[test]
fn test_clear_user_data_preserves_ledger_key() {
    let store = LocalStore::open_in_memory().unwrap();
    let data = seed_service::create_seed_data("user_1");
    store.store_user_data("user_1", &data).unwrap();
    store.put_raw(&keys::migration_status("user_1"), "\"pending\"").unwrap();

    store.clear_user_data("user_1").unwrap();

    assert!(store.load_user_data("user_1").unwrap().is_empty());
    assert!(store.get_raw(&keys::migration_status("user_1")).unwrap().is_some());
}

#[test]
fn test_persistent_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");

    {
        let store = LocalStore::open(&path).unwrap();
        store.put_raw("k", "42").unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("42"));
}
