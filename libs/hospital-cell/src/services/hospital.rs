use std::sync::Arc;

use tracing::debug;

use shared_database::Storage;
use shared_utils::AppState;

use crate::models::{Hospital, HospitalError};

/// Hospital reference data, seeded at startup and never written by clients.
pub struct HospitalService {
    storage: Arc<dyn Storage>,
}

impl HospitalService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }

    pub async fn list_hospitals(&self) -> Result<Vec<Hospital>, HospitalError> {
        debug!("Listing hospitals");
        Ok(self.storage.get_hospitals().await?)
    }
}
