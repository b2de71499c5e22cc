use std::sync::Arc;

use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/search/{query}", get(handlers::search_doctors))
        .route("/specialization/{specialization}", get(handlers::get_doctors_by_specialization))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}

pub fn timeslot_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{doctor_id}/{date}", get(handlers::get_time_slots))
        .with_state(state)
}
