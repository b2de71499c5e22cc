// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use tracing::{debug, info};

use shared_database::Storage;
use shared_utils::AppState;

use crate::models::{Appointment, AppointmentError, NewAppointment};

/// Booking and lookup. Slots are not reserved and nothing checks for a
/// second booking with the same doctor at the same time.
pub struct AppointmentBookingService {
    storage: Arc<dyn Storage>,
}

impl AppointmentBookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }

    pub async fn book_appointment(
        &self,
        request: NewAppointment,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Booking appointment with doctor {} for {}", request.doctor_id, request.patient_email);

        let appointment = self.storage.create_appointment(request).await?;

        info!(
            "Appointment {} booked as {} for {}",
            appointment.id, appointment.booking_id, appointment.appointment_time
        );
        Ok(appointment)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Listing all appointments");
        Ok(self.storage.get_appointments().await?)
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", appointment_id);

        self.storage
            .get_appointment(appointment_id)
            .await?
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn get_patient_appointments(&self, email: &str) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Fetching appointments for patient: {}", email);
        Ok(self.storage.get_appointments_by_patient_email(email).await?)
    }
}
