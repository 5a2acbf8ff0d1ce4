//! Sample data seeding for first-time users.
//!
//! Generates Work/Personal/Learning spaces with a few groups and starter
//! bookmarks so a fresh account is not an empty screen.

use crate::storage::{LocalStore, UserData};
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;
use crate::types::generate_id;
use crate::types::group::Group;
use crate::types::space::Space;
use crate::types::timestamp::Timestamp;

fn seed_space(user_id: &str, name: &str, icon: &str, order: i64, now: &Timestamp) -> Space {
    Space {
        id: generate_id("space"),
        user_id: user_id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: None,
        order,
        is_archived: false,
        created_at: now.clone(),
        updated_at: now.clone(),
    }
}

fn seed_group(user_id: &str, space_id: &str, name: &str, order: i64, now: &Timestamp) -> Group {
    Group {
        id: generate_id("group"),
        user_id: user_id.to_string(),
        space_id: space_id.to_string(),
        name: name.to_string(),
        icon: None,
        order,
        is_archived: false,
        created_at: now.clone(),
        updated_at: now.clone(),
    }
}

fn seed_bookmark(
    user_id: &str,
    group: &Group,
    title: &str,
    url: &str,
    order: i64,
    now: &Timestamp,
) -> Bookmark {
    Bookmark {
        id: generate_id("bookmark"),
        user_id: user_id.to_string(),
        space_id: group.space_id.clone(),
        group_id: group.id.clone(),
        title: title.to_string(),
        url: url.to_string(),
        favicon_url: None,
        description: None,
        order,
        is_pinned: false,
        is_archived: false,
        created_at: now.clone(),
        updated_at: now.clone(),
    }
}

/// Generates sample spaces for a new user.
pub fn seed_spaces(user_id: &str) -> Vec<Space> {
    let now = Timestamp::now();
    vec![
        seed_space(user_id, "Work", "💼", 0, &now),
        seed_space(user_id, "Personal", "🏠", 1, &now),
        seed_space(user_id, "Learning", "📚", 2, &now),
    ]
}

/// Generates sample groups for the seed spaces.
pub fn seed_groups(user_id: &str, spaces: &[Space]) -> Vec<Group> {
    let now = Timestamp::now();
    let mut groups = Vec::new();

    if let Some(work) = spaces.iter().find(|s| s.name == "Work") {
        groups.push(seed_group(user_id, &work.id, "Development", 0, &now));
        groups.push(seed_group(user_id, &work.id, "Design", 1, &now));
        groups.push(seed_group(user_id, &work.id, "Documentation", 2, &now));
    }
    if let Some(personal) = spaces.iter().find(|s| s.name == "Personal") {
        groups.push(seed_group(user_id, &personal.id, "Social", 0, &now));
        groups.push(seed_group(user_id, &personal.id, "Shopping", 1, &now));
    }
    if let Some(learning) = spaces.iter().find(|s| s.name == "Learning") {
        groups.push(seed_group(user_id, &learning.id, "Courses", 0, &now));
        groups.push(seed_group(user_id, &learning.id, "Articles", 1, &now));
    }

    groups
}

/// Generates starter bookmarks for the seed groups.
pub fn seed_bookmarks(user_id: &str, groups: &[Group]) -> Vec<Bookmark> {
    let now = Timestamp::now();
    let mut bookmarks = Vec::new();

    if let Some(dev) = groups.iter().find(|g| g.name == "Development") {
        bookmarks.push(seed_bookmark(user_id, dev, "GitHub", "https://github.com", 0, &now));
        bookmarks.push(seed_bookmark(user_id, dev, "MDN Web Docs", "https://developer.mozilla.org", 1, &now));
    }
    if let Some(design) = groups.iter().find(|g| g.name == "Design") {
        bookmarks.push(seed_bookmark(user_id, design, "Figma", "https://figma.com", 0, &now));
    }
    if let Some(courses) = groups.iter().find(|g| g.name == "Courses") {
        bookmarks.push(seed_bookmark(user_id, courses, "freeCodeCamp", "https://freecodecamp.org", 0, &now));
    }

    bookmarks
}

/// Generates the full sample dataset for a new user.
pub fn create_seed_data(user_id: &str) -> UserData {
    let spaces = seed_spaces(user_id);
    let groups = seed_groups(user_id, &spaces);
    let bookmarks = seed_bookmarks(user_id, &groups);
    UserData {
        spaces,
        groups,
        bookmarks,
    }
}

/// Seeds the local cache for a first-time user. No-op when the user already
/// has any local data.
pub fn seed_local(store: &LocalStore, user_id: &str) -> Result<bool, StoreError> {
    let existing = store.load_user_data(user_id)?;
    if !existing.is_empty() {
        return Ok(false);
    }
    store.store_user_data(user_id, &create_seed_data(user_id))?;
    Ok(true)
}
