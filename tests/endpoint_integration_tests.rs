/// Endpoint smoke test suite
///
/// Drives a running booking API over HTTP and checks the documented status
/// codes and payloads end to end. Start the server first, then:
///
///     BOOKING_API_URL=http://localhost:5000 cargo run -p endpoint-smoke-tests
///
/// Test Categories:
/// - Doctor directory
/// - Appointment lifecycle (book, read, reschedule, cancel)
/// - Hospitals and time slots
/// - Error handling and edge cases

use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client.get(format!("{}{}", self.base_url, path)).send().await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Response, reqwest::Error> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Response, reqwest::Error> {
        self.client
            .patch(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client.delete(format!("{}{}", self.base_url, path)).send().await
    }
}

/// Test results tracker
#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        println!("PASS {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: &str) {
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("FAIL {}: {}", test_name, error);
    }

    /// Records a status check; returns the decoded body when the status matched.
    pub async fn expect_status(
        &mut self,
        test_name: &str,
        response: Result<Response, reqwest::Error>,
        expected: StatusCode,
    ) -> Option<Value> {
        match response {
            Ok(response) if response.status() == expected => {
                self.pass(test_name);
                Some(response.json().await.unwrap_or(Value::Null))
            }
            Ok(response) => {
                self.fail(test_name, &format!("Status: {} (expected {})", response.status(), expected));
                None
            }
            Err(e) => {
                self.fail(test_name, &e.to_string());
                None
            }
        }
    }

    pub fn check(&mut self, test_name: &str, condition: bool, detail: &str) {
        if condition {
            self.pass(test_name);
        } else {
            self.fail(test_name, detail);
        }
    }

    pub fn summary(&self) {
        println!("\nTest Summary:");
        println!("Passed: {}", self.passed);
        println!("Failed: {}", self.failed);

        if !self.failures.is_empty() {
            println!("\nFailures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }
}

fn booking_request(doctor_id: &str, email: &str) -> Value {
    json!({
        "doctorId": doctor_id,
        "patientName": "Smoke Test",
        "patientEmail": email,
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

pub async fn run_endpoint_tests() -> TestResults {
    let client = ApiTestClient::new();
    let mut results = TestResults::default();
    let booking_id_pattern = Regex::new(r"^HC-\d{4}-\d{3,}$").unwrap();

    println!("Starting endpoint smoke tests against {}", client.base_url);

    // DOCTOR CELL TESTS
    println!("\nDoctor Cell Tests");

    let doctors = results
        .expect_status("List doctors", client.get("/api/doctors").await, StatusCode::OK)
        .await
        .unwrap_or(Value::Null);
    let doctor_id = doctors[0]["id"].as_str().unwrap_or("1").to_string();

    results
        .expect_status("Get doctor", client.get(&format!("/api/doctors/{}", doctor_id)).await, StatusCode::OK)
        .await;
    results
        .expect_status("Unknown doctor", client.get("/api/doctors/no-such-doctor").await, StatusCode::NOT_FOUND)
        .await;

    if let Some(found) = results
        .expect_status("Search doctors", client.get("/api/doctors/search/cardio").await, StatusCode::OK)
        .await
    {
        let all_match = found.as_array().is_some_and(|list| {
            list.iter().all(|doctor| {
                ["name", "specialization", "hospital"].iter().any(|field| {
                    doctor[*field].as_str().is_some_and(|v| v.to_lowercase().contains("cardio"))
                })
            })
        });
        results.check("Search results match query", all_match, "a result does not contain 'cardio'");
    }

    results
        .expect_status(
            "Doctors by specialization",
            client.get("/api/doctors/specialization/neurology").await,
            StatusCode::OK,
        )
        .await;

    // APPOINTMENT CELL TESTS
    println!("\nAppointment Cell Tests");

    let created = results
        .expect_status(
            "Book appointment",
            client.post("/api/appointments", booking_request(&doctor_id, "smoke@x.com")).await,
            StatusCode::CREATED,
        )
        .await;

    if let Some(created) = created {
        let booking_id = created["bookingId"].as_str().unwrap_or_default();
        results.check(
            "Booking id format",
            booking_id_pattern.is_match(booking_id),
            &format!("unexpected booking id '{}'", booking_id),
        );

        let id = created["id"].as_str().unwrap_or_default().to_string();
        let status_path = format!("/api/appointments/{}/status", id);

        if let Some(moved) = results
            .expect_status(
                "Reschedule appointment",
                client
                    .patch(&status_path, json!({ "status": "rescheduled", "appointmentTime": "4:00 PM" }))
                    .await,
                StatusCode::OK,
            )
            .await
        {
            results.check(
                "Reschedule persisted",
                moved["status"] == "rescheduled" && moved["appointmentTime"] == "4:00 PM",
                &moved.to_string(),
            );
        }

        results
            .expect_status("Status required", client.patch(&status_path, json!({})).await, StatusCode::BAD_REQUEST)
            .await;
        results
            .expect_status(
                "Patient appointments",
                client.get("/api/appointments/patient/smoke@x.com").await,
                StatusCode::OK,
            )
            .await;

        let appointment_path = format!("/api/appointments/{}", id);
        results
            .expect_status("Cancel appointment", client.delete(&appointment_path).await, StatusCode::OK)
            .await;
        results
            .expect_status("Cancelled appointment is gone", client.get(&appointment_path).await, StatusCode::NOT_FOUND)
            .await;
    }

    // ERROR HANDLING TESTS
    println!("\nError Handling Tests");

    if let Some(rejected) = results
        .expect_status(
            "Invalid booking payload",
            client.post("/api/appointments", json!({ "doctorId": doctor_id })).await,
            StatusCode::BAD_REQUEST,
        )
        .await
    {
        results.check(
            "Validation errors listed",
            rejected["errors"].as_array().is_some_and(|errors| !errors.is_empty()),
            &rejected.to_string(),
        );
    }

    results
        .expect_status(
            "Unknown appointment",
            client.get("/api/appointments/no-such-appointment").await,
            StatusCode::NOT_FOUND,
        )
        .await;

    // REFERENCE DATA TESTS
    println!("\nReference Data Tests");

    results
        .expect_status("List hospitals", client.get("/api/hospitals").await, StatusCode::OK)
        .await;
    results
        .expect_status(
            "Time slots",
            client.get(&format!("/api/timeslots/{}/2025-01-10", doctor_id)).await,
            StatusCode::OK,
        )
        .await;

    results
}

#[tokio::main]
async fn main() {
    let results = run_endpoint_tests().await;
    results.summary();

    if results.failed > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "needs a running server"]
    async fn test_endpoint_smoke_suite() {
        let results = run_endpoint_tests().await;
        assert_eq!(results.failed, 0, "failures: {:?}", results.failures);
    }

    #[test]
    fn test_booking_request_shape() {
        let request = booking_request("doc-1", "a@x.com");
        assert_eq!(request["doctorId"], "doc-1");
        assert_eq!(request["patientEmail"], "a@x.com");
        assert!(request.get("bookingId").is_none());
    }
}
