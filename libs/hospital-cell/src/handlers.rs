use std::sync::Arc;

use axum::{extract::State, Json};

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::Hospital;
use crate::services::HospitalService;

#[axum::debug_handler]
pub async fn list_hospitals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Hospital>>, AppError> {
    let service = HospitalService::new(&state);

    let hospitals = service.list_hospitals().await?;

    Ok(Json(hospitals))
}
