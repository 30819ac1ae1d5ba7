use std::sync::Arc;
use thiserror::Error;

use crate::modules::progress::adapters::outbound::progress_store::{ProgressStore, StoreError};
use crate::modules::progress::core::update::SubmitOutcome;
use crate::modules::progress::use_cases::submit_update::command::SubmitUpdate;
use crate::modules::progress::use_cases::submit_update::normalize::{
    ValidationError, normalize_submit,
};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub struct SubmitUpdateHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitUpdateHandler<TStore>
where
    TStore: ProgressStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitUpdate) -> Result<SubmitOutcome, ApplicationError> {
        let update = normalize_submit(command)?;
        let outcome = self.store.upsert_day(&update).await?;
        Ok(outcome)
    }
}
