// Server-side CRUD managers, one per entity collection.
// Managers borrow the database connection and are created on demand.

pub mod bookmark_manager;
pub mod group_manager;
pub mod space_manager;
