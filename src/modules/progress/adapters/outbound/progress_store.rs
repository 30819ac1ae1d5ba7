// Outbound port for the per-user progress record store.
//
// Purpose
// - Describe what the use cases need from storage as a trait, so handlers
//   stay independent of any concrete backend.
//
// Boundaries
// - `upsert_day` is a single store operation: the existence check for the
//   (email, date) day record and the resulting mutation happen atomically
//   inside the implementation. Callers never check-then-write.
//
// Testing guidance
// - Use the in memory implementation; it has an offline toggle for failure
//   paths.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::progress::core::record::UserRecord;
use crate::modules::progress::core::update::{ProgressUpdate, SubmitOutcome};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Merge the update into the matching day record, or create a new day
    /// record (and user record, for an unseen email). Always refreshes the
    /// user-level name, updatedAt and last* fields.
    async fn upsert_day(&self, update: &ProgressUpdate) -> Result<SubmitOutcome, StoreError>;

    /// Every user record, most recently updated first.
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Remove every user record. Returns how many were removed.
    async fn clear_all(&self) -> Result<u64, StoreError>;
}
