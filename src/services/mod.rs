// Spacemarks services.
// Each submodule provides one focused service used by the RPC layer.

pub mod migration_service;
pub mod seed_service;
pub mod sync_client;
pub mod sync_service;
