//! Types for the local-to-cloud migration flow.

use serde::{Deserialize, Serialize};

/// Persisted per-user migration status. `Pending` is the default when no
/// status has ever been stored. `Completed` and `Skipped` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    Pending,
    Completed,
    Skipped,
}

impl MigrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationStatus::Pending => "pending",
            MigrationStatus::Completed => "completed",
            MigrationStatus::Skipped => "skipped",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MigrationStatus::Pending)
    }
}

/// The user's reconciliation choice presented by the migration dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationChoice {
    /// Push local data to the server.
    Upload,
    /// Discard local data; the server copy becomes canonical.
    UseCloud,
    /// Push local data; the server's upsert arbitrates conflicts.
    KeepBoth,
}

impl MigrationChoice {
    pub fn parse(s: &str) -> Option<MigrationChoice> {
        match s {
            "upload" => Some(MigrationChoice::Upload),
            "use_cloud" => Some(MigrationChoice::UseCloud),
            "keep_both" => Some(MigrationChoice::KeepBoth),
            _ => None,
        }
    }
}

/// Counts of the three local collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDataCounts {
    pub spaces: usize,
    pub groups: usize,
    pub bookmarks: usize,
}

impl LocalDataCounts {
    pub fn has_data(&self) -> bool {
        self.spaces + self.groups + self.bookmarks > 0
    }
}

/// Snapshot computed by `check_migration_state`. Never persisted — only the
/// `status` field lives in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationState {
    pub status: MigrationStatus,
    pub has_local_data: bool,
    pub has_server_data: bool,
    pub local_data_counts: LocalDataCounts,
}

impl MigrationState {
    /// State reported once the flow is terminal for a user: no data is
    /// re-examined, so nothing re-prompts.
    pub fn terminal(status: MigrationStatus) -> Self {
        MigrationState {
            status,
            has_local_data: false,
            has_server_data: false,
            local_data_counts: LocalDataCounts::default(),
        }
    }
}
