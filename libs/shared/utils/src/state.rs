use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::{MemStorage, Storage};

/// Router state: the store every cell reads and writes.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Builds a fresh in-memory store, seeded unless the config disables it.
    pub fn in_memory(config: &AppConfig) -> Self {
        let storage: Arc<dyn Storage> = if config.seed_mock_data {
            Arc::new(MemStorage::seeded())
        } else {
            Arc::new(MemStorage::new())
        };
        Self::new(storage)
    }
}
