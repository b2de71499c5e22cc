// libs/appointment-cell/src/services/lifecycle.rs
use std::sync::Arc;

use tracing::{debug, info};

use shared_database::Storage;
use shared_utils::AppState;

use crate::models::{Appointment, AppointmentError, StatusUpdate};

/// Status changes and cancellation. Any status may follow any other.
pub struct AppointmentLifecycleService {
    storage: Arc<dyn Storage>,
}

impl AppointmentLifecycleService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }

    pub async fn update_status(
        &self,
        appointment_id: &str,
        update: StatusUpdate,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Setting appointment {} status to {}", appointment_id, update.status);

        let appointment = self
            .storage
            .update_appointment_status(appointment_id, update)
            .await?
            .ok_or(AppointmentError::NotFound)?;

        info!("Appointment {} is now {}", appointment.id, appointment.status);
        Ok(appointment)
    }

    /// Removes the appointment outright; no record of it is kept.
    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), AppointmentError> {
        debug!("Cancelling appointment: {}", appointment_id);

        if !self.storage.delete_appointment(appointment_id).await? {
            return Err(AppointmentError::NotFound);
        }

        info!("Appointment {} deleted", appointment_id);
        Ok(())
    }
}
