//! Local cache storage for Spacemarks.
//!
//! A per-user namespaced key-value store holding the three entity
//! collections and the migration status ledger. Purely local — no network
//! calls ever originate here.

pub mod keys;
pub mod local_store;

pub use local_store::{LocalStore, UserData};
