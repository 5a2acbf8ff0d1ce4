//! App Core for Spacemarks.
//!
//! Central struct holding the server-side database, the local cache store,
//! and the async runtime used by the migration paths.

use std::future::Future;
use std::sync::Arc;

use crate::database::Database;
use crate::services::migration_service::MigrationService;
use crate::services::sync_client::InProcessSyncClient;
use crate::storage::LocalStore;

/// Central application struct.
///
/// Managers are created on demand via `db.connection()` because they borrow
/// the connection with a lifetime parameter. The migration service is
/// constructed per user via [`App::migration_service`].
pub struct App {
    pub db: Arc<Database>,
    pub local: Arc<LocalStore>,
    runtime: tokio::runtime::Runtime,
}

impl App {
    /// Creates a new App with persistent stores at the given paths.
    pub fn new(db_path: &str, local_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let local = Arc::new(LocalStore::open(local_path)?);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { db, local, runtime })
    }

    /// Creates an App backed by in-memory stores. Used by tests and the
    /// demo binary.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        let local = Arc::new(LocalStore::open_in_memory()?);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { db, local, runtime })
    }

    /// Migration reconciler for a user, bridged to the in-process server.
    pub fn migration_service(&self, user_id: &str) -> MigrationService<InProcessSyncClient> {
        MigrationService::new(
            self.local.clone(),
            InProcessSyncClient::new(self.db.clone(), user_id),
        )
    }

    /// Drives an async migration operation to completion on the app runtime.
    pub fn block_on<F: Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }
}
