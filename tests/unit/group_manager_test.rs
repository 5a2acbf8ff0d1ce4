//! Unit tests for the GroupManager public API.

use spacemarks::database::Database;
use spacemarks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use spacemarks::managers::group_manager::{GroupManager, GroupManagerTrait};
use spacemarks::managers::space_manager::{SpaceManager, SpaceManagerTrait};
use spacemarks::types::bookmark::CreateBookmarkInput;
use spacemarks::types::group::{CreateGroupInput, UpdateGroupInput};
use spacemarks::types::space::CreateSpaceInput;

const USER: &str = "user_test";

fn setup() -> (Database, String) {
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
    let space_id = space.id;
    (db, space_id)
}

fn group_in(space_id: &str, name: &str) -> CreateGroupInput {
    CreateGroupInput {
        space_id: space_id.to_string(),
        name: name.to_string(),
        icon: None,
    }
}

#[test]
fn test_create_group_requires_existing_space() {
    let (db, _) = setup();
    let mut mgr = GroupManager::new(db.connection());

    let err = mgr
        .create_group(USER, group_in("space_missing", "Dev"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Space not found: space_missing");
}

#[test]
fn test_create_group_assigns_order_within_space() {
    let (db, space_id) = setup();
    let conn = db.connection();
    let other_space = SpaceManager::new(conn)
        .create_space(
            USER,
            CreateSpaceInput {
                name: "Personal".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

    let mut mgr = GroupManager::new(conn);
    let a = mgr.create_group(USER, group_in(&space_id, "Dev")).unwrap();
    let b = mgr.create_group(USER, group_in(&space_id, "Design")).unwrap();
    let c = mgr.create_group(USER, group_in(&other_space.id, "Social")).unwrap();

    assert_eq!(a.order, 0);
    assert_eq!(b.order, 1);
    // Order restarts per space
    assert_eq!(c.order, 0);
    assert!(a.id.starts_with("group_"));
}

#[test]
fn test_list_groups_filtered_by_space() {
    let (db, space_id) = setup();
    let conn = db.connection();
    let other_space = SpaceManager::new(conn)
        .create_space(
            USER,
            CreateSpaceInput {
                name: "Personal".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

    let mut mgr = GroupManager::new(conn);
    mgr.create_group(USER, group_in(&space_id, "Dev")).unwrap();
    mgr.create_group(USER, group_in(&other_space.id, "Social")).unwrap();

    assert_eq!(mgr.list_groups(USER, Some(&space_id)).unwrap().len(), 1);
    assert_eq!(mgr.list_groups(USER, None).unwrap().len(), 2);
}

#[test]
fn test_update_group_partial() {
    let (db, space_id) = setup();
    let mut mgr = GroupManager::new(db.connection());

    let group = mgr.create_group(USER, group_in(&space_id, "Dev")).unwrap();
    let updated = mgr
        .update_group(
            &group.id,
            UpdateGroupInput {
                icon: Some(Some("🛠".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.icon.as_deref(), Some("🛠"));
    assert_eq!(updated.name, "Dev");
}

#[test]
fn test_delete_group_cascades_bookmarks() {
    let (db, space_id) = setup();
    let conn = db.connection();

    let group = GroupManager::new(conn)
        .create_group(USER, group_in(&space_id, "Dev"))
        .unwrap();
    BookmarkManager::new(conn)
        .create_bookmark(
            USER,
            CreateBookmarkInput {
                space_id: space_id.clone(),
                group_id: group.id.clone(),
                title: "Rust".to_string(),
                url: "https://rust-lang.org".to_string(),
                favicon_url: None,
                description: None,
            },
        )
        .unwrap();

    GroupManager::new(conn).delete_group(&group.id).unwrap();

    assert!(BookmarkManager::new(conn)
        .list_bookmarks(USER, None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_reorder_groups_within_space() {
    let (db, space_id) = setup();
    let mut mgr = GroupManager::new(db.connection());

    let a = mgr.create_group(USER, group_in(&space_id, "A")).unwrap();
    let b = mgr.create_group(USER, group_in(&space_id, "B")).unwrap();

    mgr.reorder_groups(&space_id, &[b.id.clone(), a.id.clone()]).unwrap();

    let names: Vec<String> = mgr
        .list_groups(USER, Some(&space_id))
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}
