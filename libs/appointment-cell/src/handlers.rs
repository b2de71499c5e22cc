// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::{validate_body, AppState};

use crate::models::{MessageResponse, NewAppointment, UpdateStatusRequest};
use crate::services::{booking::AppointmentBookingService, lifecycle::AppointmentLifecycleService};

// ==============================================================================
// APPOINTMENT LOOKUP HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let appointments = booking_service.list_appointments().await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let appointment = booking_service.get_appointment(&appointment_id).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let booking_service = AppointmentBookingService::new(&state);

    let appointments = booking_service.get_patient_appointments(&email).await?;

    Ok(Json(json!(appointments)))
}

// ==============================================================================
// APPOINTMENT MUTATION HANDLERS
// ==============================================================================

/// Book an appointment. Only the body's shape is checked.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let request: NewAppointment =
        validate_body(payload, NewAppointment::REQUIRED_FIELDS, "Invalid appointment data")?;

    let booking_service = AppointmentBookingService::new(&state);

    let appointment = booking_service.book_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request: UpdateStatusRequest = validate_body(payload, &[], "Invalid status update")?;
    let update = request.into_update()?;

    let lifecycle_service = AppointmentLifecycleService::new(&state);

    let appointment = lifecycle_service.update_status(&appointment_id, update).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let lifecycle_service = AppointmentLifecycleService::new(&state);

    lifecycle_service.cancel_appointment(&appointment_id).await?;

    Ok(Json(MessageResponse {
        message: "Appointment cancelled successfully".to_string(),
    }))
}
