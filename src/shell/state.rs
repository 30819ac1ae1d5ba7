use std::sync::Arc;

use crate::modules::progress::adapters::outbound::progress_store::ProgressStore;
use crate::modules::progress::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use crate::modules::progress::use_cases::submit_update::handler::SubmitUpdateHandler;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitUpdateHandler<InMemoryProgressStore>>,
    pub store: Arc<dyn ProgressStore>,
}
