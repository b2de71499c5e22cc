use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use doctor_cell::router::{doctor_routes, timeslot_routes};
use hospital_cell::router::hospital_routes;
use shared_utils::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Appointment booking API is running!" }))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state.clone()))
        .nest("/api/hospitals", hospital_routes(state.clone()))
        .nest("/api/timeslots", timeslot_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use shared_utils::test_utils::{MockPayloads, TestClient, TestState};

    fn client() -> TestClient {
        TestClient::new(create_router(TestState::seeded()))
    }

    #[tokio::test]
    async fn test_cells_are_mounted_under_api() {
        let client = client();

        let (status, doctors) = client.get("/api/doctors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doctors.as_array().unwrap().len(), 3);

        let (status, hospitals) = client.get("/api/hospitals").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hospitals.as_array().unwrap().len(), 2);

        let (status, appointments) = client.get("/api/appointments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(appointments, json!([]));

        let doctor_id = doctors[0]["id"].as_str().unwrap();
        let (status, slots) = client.get(&format!("/api/timeslots/{}/2025-01-10", doctor_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(slots, json!([]));
    }

    #[tokio::test]
    async fn test_booking_flow_through_full_router() {
        let client = client();
        let (_, doctors) = client.get("/api/doctors/search/cardio").await;
        let doctor = &doctors[0];

        let mut payload = MockPayloads::appointment_request();
        payload["doctorId"] = doctor["id"].clone();
        payload["fee"] = doctor["fee"].clone();

        let (status, created) = client.post("/api/appointments", payload).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["fee"], "150.00");

        let (_, mine) = client.get("/api/appointments/patient/jane@x.com").await;
        assert_eq!(mine.as_array().unwrap().len(), 1);

        let uri = format!("/api/appointments/{}", created["id"].as_str().unwrap());
        let (status, _) = client.delete(&uri).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = client.get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = client().get("/api/patients").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
