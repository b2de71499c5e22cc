// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StorageError;
use shared_models::error::AppError;

pub use shared_models::{Appointment, AppointmentStatus, NewAppointment, StatusUpdate};

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Body of `PATCH /{id}/status`. Reschedules send the new date and label
/// alongside `status: "rescheduled"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub appointment_time: Option<String>,
}

impl UpdateStatusRequest {
    pub fn into_update(self) -> Result<StatusUpdate, AppointmentError> {
        let status = match self.status {
            Some(status) if !status.is_empty() => AppointmentStatus::from(status),
            _ => return Err(AppointmentError::StatusRequired),
        };

        Ok(StatusUpdate {
            status,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Status is required")]
    StatusRequired,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<AppointmentError> for AppError {
    fn from(error: AppointmentError) -> Self {
        match error {
            AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
            AppointmentError::StatusRequired => AppError::BadRequest("Status is required".to_string()),
            AppointmentError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}
