//! Unit tests for the sample-data seeder.

use std::collections::HashSet;

use spacemarks::services::seed_service;
use spacemarks::storage::LocalStore;

const USER: &str = "user_test";

#[test]
fn test_seed_spaces_shape() {
    let spaces = seed_service::seed_spaces(USER);

    let names: Vec<&str> = spaces.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Personal", "Learning"]);

    for (i, space) in spaces.iter().enumerate() {
        assert_eq!(space.order, i as i64);
        assert_eq!(space.user_id, USER);
        assert!(!space.is_archived);
        assert!(space.id.starts_with("space_"));
    }
}

#[test]
fn test_seed_groups_belong_to_seed_spaces() {
    let spaces = seed_service::seed_spaces(USER);
    let groups = seed_service::seed_groups(USER, &spaces);

    assert_eq!(groups.len(), 7);

    let space_ids: HashSet<&str> = spaces.iter().map(|s| s.id.as_str()).collect();
    for group in &groups {
        assert!(space_ids.contains(group.space_id.as_str()));
        assert_eq!(group.user_id, USER);
    }

    // Order restarts within each space
    let work = spaces.iter().find(|s| s.name == "Work").unwrap();
    let work_orders: Vec<i64> = groups
        .iter()
        .filter(|g| g.space_id == work.id)
        .map(|g| g.order)
        .collect();
    assert_eq!(work_orders, vec![0, 1, 2]);
}

#[test]
fn test_seed_bookmarks_reference_their_groups_space() {
    let spaces = seed_service::seed_spaces(USER);
    let groups = seed_service::seed_groups(USER, &spaces);
    let bookmarks = seed_service::seed_bookmarks(USER, &groups);

    assert!(!bookmarks.is_empty());
    for bm in &bookmarks {
        let group = groups.iter().find(|g| g.id == bm.group_id).unwrap();
        assert_eq!(bm.space_id, group.space_id);
        assert!(bm.url.starts_with("https://"));
    }
}

#[test]
fn test_create_seed_data_ids_are_unique() {
    let data = seed_service::create_seed_data(USER);

    let mut ids = HashSet::new();
    for s in &data.spaces {
        assert!(ids.insert(s.id.clone()));
    }
    for g in &data.groups {
        assert!(ids.insert(g.id.clone()));
    }
    for b in &data.bookmarks {
        assert!(ids.insert(b.id.clone()));
    }
}

#[test]
fn test_seed_local_populates_fresh_store() {
    let store = LocalStore::open_in_memory().unwrap();

    assert!(seed_service::seed_local(&store, USER).unwrap());

    let data = store.load_user_data(USER).unwrap();
    assert_eq!(data.spaces.len(), 3);
    assert_eq!(data.groups.len(), 7);
    assert!(!data.bookmarks.is_empty());
}

#[test]
fn test_seed_local_is_noop_when_data_exists() {
    let store = LocalStore::open_in_memory().unwrap();
    seed_service::seed_local(&store, USER).unwrap();
    let before = store.load_user_data(USER).unwrap();

    assert!(!seed_service::seed_local(&store, USER).unwrap());
    assert_eq!(store.load_user_data(USER).unwrap(), before);
}
