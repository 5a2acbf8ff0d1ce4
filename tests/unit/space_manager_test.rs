//! Unit tests for the SpaceManager public API, using an in-memory SQLite
//! database.

use spacemarks::database::Database;
use spacemarks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use spacemarks::managers::group_manager::{GroupManager, GroupManagerTrait};
use spacemarks::managers::space_manager::{SpaceManager, SpaceManagerTrait};
use spacemarks::types::bookmark::CreateBookmarkInput;
use spacemarks::types::group::CreateGroupInput;
use spacemarks::types::space::{CreateSpaceInput, UpdateSpaceInput};

const USER: &str = "user_test";

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

fn named(name: &str) -> CreateSpaceInput {
    CreateSpaceInput {
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_space_assigns_sequential_order() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());

    let a = mgr.create_space(USER, named("Work")).unwrap();
    let b = mgr.create_space(USER, named("Personal")).unwrap();

    assert_eq!(a.order, 0);
    assert_eq!(b.order, 1);
    assert!(a.id.starts_with("space_"));
    assert_eq!(a.icon, "📁");
    assert!(!a.is_archived);
}

#[test]
fn test_order_is_per_user() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());

    mgr.create_space("user_a", named("A1")).unwrap();
    let other = mgr.create_space("user_b", named("B1")).unwrap();
    assert_eq!(other.order, 0);
}

#[test]
fn test_list_spaces_sorted_by_order() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());

    let a = mgr.create_space(USER, named("First")).unwrap();
    let b = mgr.create_space(USER, named("Second")).unwrap();
    let c = mgr.create_space(USER, named("Third")).unwrap();

    mgr.reorder_spaces(USER, &[c.id.clone(), a.id.clone(), b.id.clone()])
        .unwrap();

    let names: Vec<String> = mgr
        .list_spaces(USER)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Third", "First", "Second"]);
}

#[test]
fn test_update_space_partial_refreshes_updated_at() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());

    let space = mgr.create_space(USER, named("Work")).unwrap();
    let updated = mgr
        .update_space(
            &space.id,
            UpdateSpaceInput {
                name: Some("Office".to_string()),
                is_archived: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Office");
    assert!(updated.is_archived);
    // Untouched fields survive
    assert_eq!(updated.icon, space.icon);
    assert_eq!(updated.created_at, space.created_at);
}

#[test]
fn test_update_missing_space_is_not_found() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());
    let err = mgr
        .update_space("space_missing", UpdateSpaceInput::default())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_delete_space_cascades_groups_and_bookmarks() {
    let db = setup();
    let conn = db.connection();

    let space = SpaceManager::new(conn).create_space(USER, named("Work")).unwrap();
    let group = GroupManager::new(conn)
        .create_group(
            USER,
            CreateGroupInput {
                space_id: space.id.clone(),
                name: "Dev".to_string(),
                icon: None,
            },
        )
        .unwrap();
    BookmarkManager::new(conn)
        .create_bookmark(
            USER,
            CreateBookmarkInput {
                space_id: space.id.clone(),
                group_id: group.id.clone(),
                title: "Rust".to_string(),
                url: "https://rust-lang.org".to_string(),
                favicon_url: None,
                description: None,
            },
        )
        .unwrap();

    SpaceManager::new(conn).delete_space(&space.id).unwrap();

    assert!(GroupManager::new(conn).list_groups(USER, None).unwrap().is_empty());
    assert!(BookmarkManager::new(conn)
        .list_bookmarks(USER, None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_delete_missing_space_is_not_found() {
    let db = setup();
    let mut mgr = SpaceManager::new(db.connection());
    assert!(mgr.delete_space("space_missing").is_err());
}
