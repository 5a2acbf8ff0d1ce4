use std::fmt;

// === StoreError ===

/// Errors from the local key-value store.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying storage operation failed.
    Database(String),
    /// Stored value could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Local store database error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Local store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === SpaceError ===

/// Errors related to space management operations.
#[derive(Debug)]
pub enum SpaceError {
    /// Space with the given ID was not found.
    NotFound(String),
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::NotFound(id) => write!(f, "Space not found: {}", id),
            SpaceError::Database(msg) => write!(f, "Space database error: {}", msg),
        }
    }
}

impl std::error::Error for SpaceError {}

// === GroupError ===

/// Errors related to group management operations.
#[derive(Debug)]
pub enum GroupError {
    /// Group with the given ID was not found.
    NotFound(String),
    /// The referenced space was not found.
    SpaceNotFound(String),
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::NotFound(id) => write!(f, "Group not found: {}", id),
            GroupError::SpaceNotFound(id) => write!(f, "Space not found: {}", id),
            GroupError::Database(msg) => write!(f, "Group database error: {}", msg),
        }
    }
}

impl std::error::Error for GroupError {}

// === BookmarkError ===

/// Errors related to bookmark management operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// The referenced group was not found.
    GroupNotFound(String),
    /// The referenced group belongs to a different space.
    SpaceMismatch { group_id: String, space_id: String },
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::GroupNotFound(id) => write!(f, "Group not found: {}", id),
            BookmarkError::SpaceMismatch { group_id, space_id } => {
                write!(f, "Group {} is not in space {}", group_id, space_id)
            }
            BookmarkError::Database(msg) => write!(f, "Bookmark database error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === SyncError ===

/// Errors related to the sync API, on either side of the wire.
#[derive(Debug)]
pub enum SyncError {
    /// Transport-level failure (request never completed).
    Network(String),
    /// The server answered with an error.
    Api(String),
    /// Server-side database operation failed.
    Database(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(msg) => write!(f, "Sync network error: {}", msg),
            SyncError::Api(msg) => write!(f, "Sync API error: {}", msg),
            SyncError::Database(msg) => write!(f, "Sync database error: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

// === MigrationError ===

/// Errors surfaced by the migration reconciler. The `Display` output is the
/// human-readable string shown in the migration dialog.
#[derive(Debug)]
pub enum MigrationError {
    /// Local store read or write failed.
    Store(StoreError),
    /// Remote pull or push failed.
    Sync(SyncError),
}

impl fmt::Display for MigrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationError::Store(e) => write!(f, "Migration failed: {}", e),
            MigrationError::Sync(e) => write!(f, "Migration failed: {}", e),
        }
    }
}

impl std::error::Error for MigrationError {}

impl From<StoreError> for MigrationError {
    fn from(e: StoreError) -> Self {
        MigrationError::Store(e)
    }
}

impl From<SyncError> for MigrationError {
    fn from(e: SyncError) -> Self {
        MigrationError::Sync(e)
    }
}
