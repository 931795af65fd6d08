use std::sync::Arc;

use taskflow_common::TaskflowConfig;
use taskflow_storage::PersistenceManager;

#[derive(Clone)]
pub struct AppState {
    pub persist: Arc<dyn PersistenceManager>,
    pub config: TaskflowConfig,
}

impl AppState {
    pub fn new(persist: Arc<dyn PersistenceManager>, config: TaskflowConfig) -> Self {
        Self { persist, config }
    }
}
