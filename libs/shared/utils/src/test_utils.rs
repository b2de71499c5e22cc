use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shared_database::{MemStorage, Storage};

use crate::state::AppState;

pub struct TestState;

impl TestState {
    /// State over the seeded demo directory.
    pub fn seeded() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(MemStorage::seeded())))
    }

    /// State over an empty store.
    pub fn empty() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(MemStorage::new())))
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Arc<AppState> {
        Arc::new(AppState::new(storage))
    }
}

pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Sends one request through a clone of the router and decodes the JSON
    /// body (`Value::Null` when the body is not JSON).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}

pub struct MockPayloads;

impl MockPayloads {
    /// The canonical booking request for Jane Doe with doctor "1".
    pub fn appointment_request() -> Value {
        json!({
            "doctorId": "1",
            "patientName": "Jane Doe",
            "patientEmail": "jane@x.com",
            "patientPhone": "5551234567",
            "patientAge": 40,
            "patientGender": "female",
            "appointmentDate": "2025-01-10T14:30:00Z",
            "appointmentTime": "2:30 PM",
            "reason": "checkup",
            "fee": "150.00",
            "status": "confirmed"
        })
    }

    pub fn appointment_request_for(doctor_id: &str, patient_email: &str) -> Value {
        let mut payload = Self::appointment_request();
        payload["doctorId"] = json!(doctor_id);
        payload["patientEmail"] = json!(patient_email);
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_creation() {
        let seeded = TestState::seeded();
        assert_eq!(seeded.storage.get_doctors().await.unwrap().len(), 3);

        let empty = TestState::empty();
        assert!(empty.storage.get_doctors().await.unwrap().is_empty());
    }

    #[test]
    fn test_payload_override() {
        let payload = MockPayloads::appointment_request_for("doc-9", "sam@x.com");
        assert_eq!(payload["doctorId"], "doc-9");
        assert_eq!(payload["patientEmail"], "sam@x.com");
        assert_eq!(payload["patientName"], "Jane Doe");
    }
}
