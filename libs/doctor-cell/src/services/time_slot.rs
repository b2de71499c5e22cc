use std::sync::Arc;

use tracing::debug;

use shared_database::Storage;
use shared_utils::AppState;

use crate::models::{DoctorError, TimeSlot};

// TODO: generate slots from doctor working hours so this endpoint stops answering with an empty list.
pub struct TimeSlotService {
    storage: Arc<dyn Storage>,
}

impl TimeSlotService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }

    pub async fn get_time_slots(&self, doctor_id: &str, date: &str) -> Result<Vec<TimeSlot>, DoctorError> {
        debug!("Fetching time slots for doctor {} on {}", doctor_id, date);
        Ok(self.storage.get_time_slots(doctor_id, date).await?)
    }
}
