use thiserror::Error;

use shared_database::StorageError;
use shared_models::error::AppError;

pub use shared_models::{Doctor, TimeSlot};

// Error types specific to doctor operations
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<DoctorError> for AppError {
    fn from(error: DoctorError) -> Self {
        match error {
            DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
            DoctorError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}
