use std::sync::Arc;

use tracing::debug;

use shared_database::Storage;
use shared_utils::AppState;

use crate::models::{Doctor, DoctorError};

/// Read-only access to the doctor directory.
pub struct DoctorService {
    storage: Arc<dyn Storage>,
}

impl DoctorService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing all doctors");
        Ok(self.storage.get_doctors().await?)
    }

    /// Get doctor by ID
    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor profile: {}", doctor_id);

        self.storage
            .get_doctor(doctor_id)
            .await?
            .ok_or(DoctorError::NotFound)
    }

    /// Free-text search over name, specialization and hospital
    pub async fn search_doctors(&self, query: &str) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Searching doctors with query: {}", query);
        Ok(self.storage.search_doctors(query).await?)
    }

    pub async fn get_doctors_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Fetching doctors by specialization: {}", specialization);
        Ok(self.storage.get_doctors_by_specialization(specialization).await?)
    }
}
