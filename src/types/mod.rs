// Spacemarks shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod errors;
pub mod group;
pub mod migration;
pub mod space;
pub mod sync;
pub mod timestamp;

use uuid::Uuid;

/// Generates a type-prefixed entity id, e.g. `space_1f9c2ab4e07d`.
pub fn generate_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &suffix[..12])
}
