// libs/doctor-cell/tests/handlers_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, State};

use doctor_cell::handlers::*;
use shared_database::{MockStorage, StorageError};
use shared_models::error::AppError;
use shared_utils::test_utils::TestState;

async fn first_doctor_id(state: &Arc<shared_utils::AppState>) -> String {
    let response = list_doctors(State(state.clone())).await.unwrap().0;
    response[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_doctors_returns_seeded_directory() {
    let state = TestState::seeded();

    let response = list_doctors(State(state)).await.unwrap().0;

    let doctors = response.as_array().unwrap();
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[0]["name"], "Dr. Sarah Johnson");
    assert_eq!(doctors[0]["reviewCount"], 127);
    assert_eq!(doctors[0]["fee"], "150.00");
    assert_eq!(doctors[0]["isAvailable"], true);
}

#[tokio::test]
async fn test_get_doctor_success() {
    let state = TestState::seeded();
    let doctor_id = first_doctor_id(&state).await;

    let response = get_doctor(State(state), Path(doctor_id.clone())).await.unwrap().0;

    assert_eq!(response["id"], doctor_id);
    assert_eq!(response["specialization"], "Cardiology");
}

#[tokio::test]
async fn test_get_doctor_not_found() {
    let state = TestState::seeded();

    let result = get_doctor(State(state), Path("does-not-exist".to_string())).await;

    assert_matches!(result, Err(AppError::NotFound(msg)) if msg == "Doctor not found");
}

#[tokio::test]
async fn test_search_doctors_matches_hospital() {
    let state = TestState::seeded();

    let response = search_doctors(State(state), Path("children".to_string())).await.unwrap().0;

    let doctors = response.as_array().unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["name"], "Dr. Emily Rodriguez");
}

#[tokio::test]
async fn test_specialization_lookup_ignores_case() {
    let state = TestState::seeded();

    let response = get_doctors_by_specialization(State(state), Path("NEUROLOGY".to_string()))
        .await
        .unwrap()
        .0;

    assert_eq!(response.as_array().unwrap().len(), 1);
    assert_eq!(response[0]["name"], "Dr. Michael Chen");
}

#[tokio::test]
async fn test_time_slots_are_empty_placeholder() {
    let state = TestState::seeded();
    let doctor_id = first_doctor_id(&state).await;

    let response = get_time_slots(State(state), Path((doctor_id, "2025-01-10".to_string())))
        .await
        .unwrap()
        .0;

    assert_eq!(response, serde_json::json!([]));
}

#[tokio::test]
async fn test_storage_failure_maps_to_storage_error() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_doctors()
        .returning(|| Err(StorageError::Unavailable("store offline".to_string())));
    let state = TestState::with_storage(Arc::new(storage));

    let result = list_doctors(State(state)).await;

    assert_matches!(result, Err(AppError::Storage(_)));
}
