use thiserror::Error;

use shared_database::StorageError;
use shared_models::error::AppError;

pub use shared_models::Hospital;

#[derive(Error, Debug)]
pub enum HospitalError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<HospitalError> for AppError {
    fn from(error: HospitalError) -> Self {
        match error {
            HospitalError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}
