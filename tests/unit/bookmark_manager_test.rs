//! Unit tests for the BookmarkManager public API.

use spacemarks::database::Database;
use spacemarks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use spacemarks::managers::group_manager::{GroupManager, GroupManagerTrait};
use spacemarks::managers::space_manager::{SpaceManager, SpaceManagerTrait};
use spacemarks::types::bookmark::{CreateBookmarkInput, UpdateBookmarkInput};
use spacemarks::types::group::CreateGroupInput;
use spacemarks::types::space::CreateSpaceInput;

const USER: &str = "user_test";

struct Fixture {
    db: Database,
    space_id: String,
    group_id: String,
}

fn setup() -> Fixture {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let space = SpaceManager::new(db.connection())
        .create_space(
            USER,
            CreateSpaceInput {
                name: "Work".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
    let group = GroupManager::new(db.connection())
        .create_group(
            USER,
            CreateGroupInput {
                space_id: space.id.clone(),
                name: "Dev".to_string(),
                icon: None,
            },
        )
        .unwrap();
    Fixture {
        db,
        space_id: space.id,
        group_id: group.id,
    }
}

fn bookmark_in(fx: &Fixture, title: &str, url: &str) -> CreateBookmarkInput {
    CreateBookmarkInput {
        space_id: fx.space_id.clone(),
        group_id: fx.group_id.clone(),
        title: title.to_string(),
        url: url.to_string(),
        favicon_url: None,
        description: None,
    }
}

#[test]
fn test_create_bookmark_defaults() {
    let fx = setup();
    let mut mgr = BookmarkManager::new(fx.db.connection());

    let bm = mgr
        .create_bookmark(USER, bookmark_in(&fx, "Rust", "https://rust-lang.org"))
        .unwrap();

    assert!(bm.id.starts_with("bookmark_"));
    assert_eq!(bm.order, 0);
    assert!(!bm.is_pinned);
    assert!(!bm.is_archived);
    assert_eq!(bm.space_id, fx.space_id);
}

#[test]
fn test_create_bookmark_requires_existing_group() {
    let fx = setup();
    let mut mgr = BookmarkManager::new(fx.db.connection());

    let mut input = bookmark_in(&fx, "X", "https://example.com");
    input.group_id = "group_missing".to_string();
    let err = mgr.create_bookmark(USER, input).unwrap_err();
    assert_eq!(err.to_string(), "Group not found: group_missing");
}

#[test]
fn test_create_bookmark_rejects_group_from_other_space() {
    let fx = setup();
    let conn = fx.db.connection();
    let other_space = SpaceManager::new(conn)
        .create_space(
            USER,
            CreateSpaceInput {
                name: "Personal".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

    let mut input = bookmark_in(&fx, "X", "https://example.com");
    input.space_id = other_space.id;
    let err = BookmarkManager::new(conn).create_bookmark(USER, input).unwrap_err();
    assert!(err.to_string().contains("is not in space"));
}

#[test]
fn test_update_bookmark_pin_and_archive() {
    let fx = setup();
    let mut mgr = BookmarkManager::new(fx.db.connection());

    let bm = mgr
        .create_bookmark(USER, bookmark_in(&fx, "Rust", "https://rust-lang.org"))
        .unwrap();
    let updated = mgr
        .update_bookmark(
            &bm.id,
            UpdateBookmarkInput {
                is_pinned: Some(true),
                description: Some(Some("The Rust language".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(updated.is_pinned);
    assert_eq!(updated.description.as_deref(), Some("The Rust language"));
    assert_eq!(updated.url, bm.url);
}

/// Moving a bookmark to a group in another space re-homes its space_id and
/// appends it to the target group.
#[test]
fn test_move_bookmark_to_group_in_other_space() {
    let fx = setup();
    let conn = fx.db.connection();

    let other_space = SpaceManager::new(conn)
        .create_space(
            USER,
            CreateSpaceInput {
                name: "Personal".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
    let other_group = GroupManager::new(conn)
        .create_group(
            USER,
            CreateGroupInput {
                space_id: other_space.id.clone(),
                name: "Social".to_string(),
                icon: None,
            },
        )
        .unwrap();

    let mut mgr = BookmarkManager::new(conn);
    let bm = mgr
        .create_bookmark(USER, bookmark_in(&fx, "Rust", "https://rust-lang.org"))
        .unwrap();

    let moved = mgr
        .update_bookmark(
            &bm.id,
            UpdateBookmarkInput {
                group_id: Some(other_group.id.clone()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(moved.group_id, other_group.id);
    assert_eq!(moved.space_id, other_space.id);
    assert_eq!(mgr.list_bookmarks(USER, Some(&fx.group_id)).unwrap().len(), 0);
    assert_eq!(mgr.list_bookmarks(USER, Some(&other_group.id)).unwrap().len(), 1);
}

#[test]
fn test_delete_bookmark() {
    let fx = setup();
    let mut mgr = BookmarkManager::new(fx.db.connection());

    let bm = mgr
        .create_bookmark(USER, bookmark_in(&fx, "Rust", "https://rust-lang.org"))
        .unwrap();
    mgr.delete_bookmark(&bm.id).unwrap();

    assert!(mgr.list_bookmarks(USER, None).unwrap().is_empty());
    assert!(mgr.delete_bookmark(&bm.id).is_err());
}

#[test]
fn test_reorder_bookmarks_within_group() {
    let fx = setup();
    let mut mgr = BookmarkManager::new(fx.db.connection());

    let a = mgr
        .create_bookmark(USER, bookmark_in(&fx, "A", "https://a.example"))
        .unwrap();
    let b = mgr
        .create_bookmark(USER, bookmark_in(&fx, "B", "https://b.example"))
        .unwrap();

    mgr.reorder_bookmarks(&fx.group_id, &[b.id.clone(), a.id.clone()])
        .unwrap();

    let titles: Vec<String> = mgr
        .list_bookmarks(USER, Some(&fx.group_id))
        .unwrap()
        .into_iter()
        .map(|bm| bm.title)
        .collect();
    assert_eq!(titles, vec!["B", "A"]);
}
