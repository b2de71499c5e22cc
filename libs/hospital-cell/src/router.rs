use std::sync::Arc;

use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers::list_hospitals;

pub fn hospital_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_hospitals))
        .with_state(state)
}
