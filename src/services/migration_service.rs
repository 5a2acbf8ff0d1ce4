//! Migration reconciler: one-time local-to-cloud data migration.
//!
//! Orchestrates the per-user migration ledger (`pending` → `completed` or
//! `skipped`), detection of local/server data presence, and the three
//! reconciliation strategies the user may choose. Once the ledger is
//! terminal, every check short-circuits and reports no data on either side,
//! so the user is never re-prompted.
//!
//! Failure semantics: any failure inside `execute` aborts the whole
//! operation and leaves the ledger at `pending`, so the user can simply
//! re-select a choice. There is no automatic retry and no partial-progress
//! persistence.

use std::sync::Arc;

use crate::storage::keys;
use crate::storage::{LocalStore, UserData};
use crate::types::errors::{MigrationError, StoreError};
use crate::types::migration::{LocalDataCounts, MigrationChoice, MigrationState, MigrationStatus};
use crate::types::sync::SyncBatch;
use crate::types::{bookmark::Bookmark, group::Group, space::Space};

use super::sync_client::SyncClient;

/// Migration reconciler over a local store and a remote client.
pub struct MigrationService<C: SyncClient> {
    local: Arc<LocalStore>,
    client: C,
}

impl<C: SyncClient> MigrationService<C> {
    pub fn new(local: Arc<LocalStore>, client: C) -> Self {
        Self { local, client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // ─── Ledger ───

    /// Persisted migration status for a user; `Pending` when unset.
    pub fn status(&self, user_id: &str) -> Result<MigrationStatus, StoreError> {
        Ok(self
            .local
            .get_json(&keys::migration_status(user_id))?
            .unwrap_or(MigrationStatus::Pending))
    }

    pub fn set_status(&self, user_id: &str, status: MigrationStatus) -> Result<(), StoreError> {
        self.local.put_json(&keys::migration_status(user_id), &status)
    }

    // ─── Local data ───

    /// All local collections for a user (empty when absent).
    pub fn local_data(&self, user_id: &str) -> Result<UserData, StoreError> {
        self.local.load_user_data(user_id)
    }

    /// Exact counts of the local collections.
    pub fn check_local_data(&self, user_id: &str) -> Result<LocalDataCounts, StoreError> {
        let data = self.local.load_user_data(user_id)?;
        Ok(LocalDataCounts {
            spaces: data.spaces.len(),
            groups: data.groups.len(),
            bookmarks: data.bookmarks.len(),
        })
    }

    /// Removes all local collections for a user. Used after cloud adoption;
    /// never called without an explicit user choice.
    pub fn clear_local_data(&self, user_id: &str) -> Result<(), StoreError> {
        self.local.clear_user_data(user_id)
    }

    // ─── Remote data ───

    /// Whether the user has any server-side data.
    ///
    /// Transport failures degrade to `false`: the UI then offers the
    /// upload-first path instead of blocking on an unreachable backend.
    pub async fn check_server_data(&self) -> bool {
        match self.client.status().await {
            Ok(status) => status.has_server_data,
            Err(e) => {
                log::warn!("failed to check server data status: {}", e);
                false
            }
        }
    }

    // ─── Reconciliation ───

    /// Computes the full migration state for a user.
    ///
    /// A terminal ledger short-circuits without touching either store. For a
    /// pending user the local-counts read and the server presence query are
    /// issued concurrently and joined.
    pub async fn check_migration_state(&self, user_id: &str) -> Result<MigrationState, MigrationError> {
        let status = self.status(user_id)?;
        if status.is_terminal() {
            return Ok(MigrationState::terminal(status));
        }

        let local_fut = async { self.check_local_data(user_id) };
        let (counts, has_server_data) = tokio::join!(local_fut, self.check_server_data());
        let counts = counts?;

        Ok(MigrationState {
            status: MigrationStatus::Pending,
            has_local_data: counts.has_data(),
            has_server_data,
            local_data_counts: counts,
        })
    }

    /// Whether the migration dialog should be presented: only when the
    /// ledger is pending and local data exists. With no local data there is
    /// nothing to migrate and the data-loading path pulls silently instead.
    pub async fn should_show_dialog(&self, user_id: &str) -> Result<bool, MigrationError> {
        let state = self.check_migration_state(user_id).await?;
        Ok(state.status == MigrationStatus::Pending && state.has_local_data)
    }

    /// Executes the chosen reconciliation strategy.
    ///
    /// The ledger advances to `Completed` only after the strategy fully
    /// succeeds, so a failed attempt is safely retryable.
    pub async fn execute(&self, user_id: &str, choice: MigrationChoice) -> Result<(), MigrationError> {
        match choice {
            // keep_both pushes local data verbatim, exactly like upload; the
            // server's id-based upsert is the sole conflict arbiter.
            MigrationChoice::Upload | MigrationChoice::KeepBoth => self.upload(user_id).await,
            MigrationChoice::UseCloud => self.use_cloud(user_id),
        }
    }

    /// Marks the flow skipped for users who don't want to migrate. Terminal.
    pub fn skip(&self, user_id: &str) -> Result<(), StoreError> {
        self.set_status(user_id, MigrationStatus::Skipped)
    }

    /// Pulls server state into the local cache, attaching the owner and
    /// normalizing timestamps, then marks the flow completed.
    pub async fn pull_to_cache(&self, user_id: &str) -> Result<UserData, MigrationError> {
        let batch = self.client.pull().await?;

        let data = UserData {
            spaces: batch
                .spaces
                .into_iter()
                .map(|s| Space::from_sync(s, user_id))
                .collect(),
            groups: batch
                .groups
                .into_iter()
                .map(|g| Group::from_sync(g, user_id))
                .collect(),
            bookmarks: batch
                .bookmarks
                .into_iter()
                .map(|b| Bookmark::from_sync(b, user_id))
                .collect(),
        };

        self.local.store_user_data(user_id, &data)?;
        self.set_status(user_id, MigrationStatus::Completed)?;
        Ok(data)
    }

    /// Pushes local data to the server as one batch, stripping `user_id`
    /// (the server re-derives it from the principal) and preserving ids,
    /// timestamps, order, and flags verbatim.
    async fn upload(&self, user_id: &str) -> Result<(), MigrationError> {
        let data = self.local.load_user_data(user_id)?;

        let batch = SyncBatch {
            spaces: data.spaces.iter().map(Space::to_sync).collect(),
            groups: data.groups.iter().map(Group::to_sync).collect(),
            bookmarks: data.bookmarks.iter().map(Bookmark::to_sync).collect(),
        };

        self.client.push(&batch).await?;
        self.set_status(user_id, MigrationStatus::Completed)?;
        Ok(())
    }

    /// Discards local data without reading it; the server copy becomes
    /// canonical. Repopulating the cache is the data-loading collaborator's
    /// job (`pull_to_cache`).
    fn use_cloud(&self, user_id: &str) -> Result<(), MigrationError> {
        self.clear_local_data(user_id)?;
        self.set_status(user_id, MigrationStatus::Completed)?;
        Ok(())
    }
}
