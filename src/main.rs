//! Spacemarks — bookmark management backend demo.
//!
//! Walks through the full flow against in-memory stores: seeding a local
//! cache, server-side CRUD, and the local-to-cloud migration reconciliation.

use spacemarks::app::App;
use spacemarks::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use spacemarks::managers::group_manager::{GroupManager, GroupManagerTrait};
use spacemarks::managers::space_manager::{SpaceManager, SpaceManagerTrait};
use spacemarks::services::seed_service;
use spacemarks::types::bookmark::CreateBookmarkInput;
use spacemarks::types::group::CreateGroupInput;
use spacemarks::types::migration::MigrationChoice;
use spacemarks::types::space::CreateSpaceInput;

const DEMO_USER: &str = "user_demo";

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Spacemarks v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Spaces → Groups → Bookmarks, with cloud migration        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let app = App::open_in_memory().expect("Failed to initialize Spacemarks");

    demo_seed(&app);
    demo_server_crud(&app);
    demo_migration(&app);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_seed(app: &App) {
    section("Local Cache Seeding");

    let seeded = seed_service::seed_local(&app.local, DEMO_USER).expect("seed failed");
    let data = app.local.load_user_data(DEMO_USER).expect("load failed");
    println!(
        "  Seeded: {} — {} spaces, {} groups, {} bookmarks in the local cache",
        seeded,
        data.spaces.len(),
        data.groups.len(),
        data.bookmarks.len()
    );
    println!("  ✓ LocalStore OK");
    println!();
}

fn demo_server_crud(app: &App) {
    section("Server-Side CRUD");

    let conn = app.db.connection();
    let space = {
        let mut mgr = SpaceManager::new(conn);
        mgr.create_space(
            "user_other",
            CreateSpaceInput {
                name: "Research".to_string(),
                icon: Some("🔬".to_string()),
                color: None,
            },
        )
        .expect("create space failed")
    };
    println!("  Created space {} ({})", space.name, space.id);

    let group = {
        let mut mgr = GroupManager::new(conn);
        mgr.create_group(
            "user_other",
            CreateGroupInput {
                space_id: space.id.clone(),
                name: "Papers".to_string(),
                icon: None,
            },
        )
        .expect("create group failed")
    };
    println!("  Created group {} ({})", group.name, group.id);

    let bookmark = {
        let mut mgr = BookmarkManager::new(conn);
        mgr.create_bookmark(
            "user_other",
            CreateBookmarkInput {
                space_id: space.id.clone(),
                group_id: group.id.clone(),
                title: "arXiv".to_string(),
                url: "https://arxiv.org".to_string(),
                favicon_url: None,
                description: None,
            },
        )
        .expect("create bookmark failed")
    };
    println!("  Created bookmark {} → {}", bookmark.title, bookmark.url);

    // Cascade: deleting the space takes the group and bookmark with it
    {
        let mut mgr = SpaceManager::new(conn);
        mgr.delete_space(&space.id).expect("delete space failed");
    }
    let remaining = BookmarkManager::new(conn)
        .list_bookmarks("user_other", None)
        .expect("list failed");
    println!("  Deleted space; {} bookmarks remain (cascade)", remaining.len());
    println!("  ✓ Managers OK");
    println!();
}

fn demo_migration(app: &App) {
    section("Migration Reconciliation");

    let svc = app.migration_service(DEMO_USER);

    let state = app
        .block_on(svc.check_migration_state(DEMO_USER))
        .expect("check failed");
    println!(
        "  Status: {} — local data: {} ({:?}), server data: {}",
        state.status.as_str(),
        state.has_local_data,
        state.local_data_counts,
        state.has_server_data
    );

    let show = app.block_on(svc.should_show_dialog(DEMO_USER)).expect("check failed");
    println!("  Migration dialog shown: {}", show);

    app.block_on(svc.execute(DEMO_USER, MigrationChoice::Upload))
        .expect("upload failed");
    println!("  Executed 'upload' — local data pushed as one batch");

    let conn = app.db.connection();
    let spaces = SpaceManager::new(conn).list_spaces(DEMO_USER).expect("list failed");
    println!("  Server now holds {} spaces for {}", spaces.len(), DEMO_USER);

    let state = app
        .block_on(svc.check_migration_state(DEMO_USER))
        .expect("check failed");
    println!(
        "  Re-check short-circuits: status={}, local={}, server={}",
        state.status.as_str(),
        state.has_local_data,
        state.has_server_data
    );
    println!("  ✓ MigrationService OK");
    println!();
}
