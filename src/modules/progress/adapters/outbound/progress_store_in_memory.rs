// In memory implementation of the ProgressStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep one UserRecord per normalized email, keyed by that email, which
//   makes email uniqueness structural.
// - Run the whole merge-or-create branch under one write lock so concurrent
//   submits for the same (email, date) cannot both create a day record.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::modules::progress::adapters::outbound::progress_store::{ProgressStore, StoreError};
use crate::modules::progress::core::record::{DayRecord, UserRecord};
use crate::modules::progress::core::update::{ProgressUpdate, SubmitOutcome};

#[derive(Default)]
pub struct InMemoryProgressStore {
    users: RwLock<HashMap<String, UserRecord>>,
    is_offline: bool,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn upsert_day(&self, update: &ProgressUpdate) -> Result<SubmitOutcome, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("progress store offline".into()));
        }

        let now = update.submitted_at;
        let mut guard = self.users.write().await;

        let user = match guard.entry(update.email.clone()) {
            Entry::Vacant(slot) => {
                let day = DayRecord {
                    date: update.date.clone(),
                    module: update.module.clone(),
                    modules: vec![update.module.clone()],
                    need_guidelines: update.need_guidelines,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(UserRecord {
                    email: update.email.clone(),
                    name: update.name.clone(),
                    last_module: update.module.clone(),
                    last_date: update.date.clone(),
                    last_need_guidelines: update.need_guidelines,
                    created_at: now,
                    updated_at: now,
                    history: vec![day],
                });
                return Ok(SubmitOutcome::NewDayRow);
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        user.name = update.name.clone();
        user.updated_at = now;
        user.last_module = update.module.clone();
        user.last_date = update.date.clone();
        user.last_need_guidelines = update.need_guidelines;

        match user.history.iter_mut().find(|day| day.date == update.date) {
            Some(day) => {
                day.module = update.module.clone();
                day.need_guidelines = update.need_guidelines;
                day.updated_at = now;
                if !day.modules.contains(&update.module) {
                    day.modules.push(update.module.clone());
                }
                Ok(SubmitOutcome::SameDayAppend)
            }
            None => {
                user.history.push(DayRecord {
                    date: update.date.clone(),
                    module: update.module.clone(),
                    modules: vec![update.module.clone()],
                    need_guidelines: update.need_guidelines,
                    created_at: now,
                    updated_at: now,
                });
                Ok(SubmitOutcome::NewDayRow)
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("progress store offline".into()));
        }

        let guard = self.users.read().await;
        let mut users: Vec<UserRecord> = guard.values().cloned().collect();
        users.sort_by_key(|user| user.updated_at);
        users.reverse();
        Ok(users)
    }

    async fn clear_all(&self) -> Result<u64, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("progress store offline".into()));
        }

        let mut guard = self.users.write().await;
        let deleted = guard.len() as u64;
        guard.clear();
        Ok(deleted)
    }
}
