//! Remote store client.
//!
//! The [`SyncClient`] trait is the seam between the migration reconciler and
//! the server. [`HttpSyncClient`] talks to a deployed backend over HTTPS;
//! [`InProcessSyncClient`] bridges straight to the local [`sync_service`]
//! for the demo binary and single-process setups. The principal is implicit
//! in the client (bearer token or captured user id) — it is never passed per
//! call.

use std::sync::Arc;

use crate::database::Database;
use crate::services::sync_service;
use crate::types::errors::SyncError;
use crate::types::sync::{SyncBatch, SyncStatus};

/// Remote operations used by the migration flow.
pub trait SyncClient {
    /// Whether the authenticated user has any server-side data.
    fn status(&self) -> impl std::future::Future<Output = Result<SyncStatus, SyncError>>;
    /// Fetches the canonical server state for the authenticated user.
    fn pull(&self) -> impl std::future::Future<Output = Result<SyncBatch, SyncError>>;
    /// Upserts a batch of all three collections in one call.
    fn push(&self, batch: &SyncBatch) -> impl std::future::Future<Output = Result<(), SyncError>>;
}

/// HTTP client for a deployed sync backend.
pub struct HttpSyncClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl HttpSyncClient {
    /// `base_url` without a trailing slash; `auth_token` is passed through
    /// as a bearer token and never interpreted client-side.
    pub fn new(base_url: &str, auth_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SyncError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(SyncError::Api(format!("{}: {}", status, body)))
        }
    }
}

impl SyncClient for HttpSyncClient {
    async fn status(&self) -> Result<SyncStatus, SyncError> {
        let resp = self
            .http
            .get(self.url("/sync/status"))
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        Self::check_response(resp)
            .await?
            .json()
            .await
            .map_err(|e| SyncError::Api(e.to_string()))
    }

    async fn pull(&self) -> Result<SyncBatch, SyncError> {
        let resp = self
            .http
            .get(self.url("/sync/pull"))
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        Self::check_response(resp)
            .await?
            .json()
            .await
            .map_err(|e| SyncError::Api(e.to_string()))
    }

    async fn push(&self, batch: &SyncBatch) -> Result<(), SyncError> {
        let resp = self
            .http
            .post(self.url("/sync/push"))
            .bearer_auth(&self.auth_token)
            .json(batch)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        Self::check_response(resp).await.map(|_| ())
    }
}

/// Client that calls the server-side sync service directly, without a
/// network hop. The principal is captured at construction.
pub struct InProcessSyncClient {
    db: Arc<Database>,
    user_id: String,
}

impl InProcessSyncClient {
    pub fn new(db: Arc<Database>, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
        }
    }
}

impl SyncClient for InProcessSyncClient {
    async fn status(&self) -> Result<SyncStatus, SyncError> {
        sync_service::status(self.db.connection(), &self.user_id)
    }

    async fn pull(&self) -> Result<SyncBatch, SyncError> {
        sync_service::pull(self.db.connection(), &self.user_id)
    }

    async fn push(&self, batch: &SyncBatch) -> Result<(), SyncError> {
        sync_service::push(self.db.connection(), &self.user_id, batch)
    }
}
