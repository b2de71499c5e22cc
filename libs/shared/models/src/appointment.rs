use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub patient_age: i32,
    pub patient_gender: String,
    pub appointment_date: DateTime<Utc>,
    /// Display label such as "2:30 PM"; not derived from `appointment_date`.
    pub appointment_time: String,
    pub reason: String,
    pub medical_history: Option<String>,
    pub status: AppointmentStatus,
    pub fee: String,
    pub booking_id: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn from_new(
        id: String,
        booking_id: String,
        created_at: DateTime<Utc>,
        new: NewAppointment,
    ) -> Self {
        Self {
            id,
            doctor_id: new.doctor_id,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            patient_phone: new.patient_phone,
            patient_age: new.patient_age,
            patient_gender: new.patient_gender,
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time,
            reason: new.reason,
            medical_history: new.medical_history,
            status: new.status,
            fee: new.fee,
            booking_id,
            created_at,
        }
    }

    /// Overwrites status unconditionally; any transition is accepted.
    pub fn apply(&mut self, update: StatusUpdate) {
        self.status = update.status;
        if let Some(date) = update.appointment_date {
            self.appointment_date = date;
        }
        if let Some(time) = update.appointment_time {
            self.appointment_time = time;
        }
    }
}

/// Lifecycle status. Known values get their own variant; anything else is
/// kept verbatim so clients can round-trip arbitrary labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
    Rescheduled,
    Cancelled,
    Completed,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Rescheduled => "rescheduled",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "confirmed" => AppointmentStatus::Confirmed,
            "rescheduled" => AppointmentStatus::Rescheduled,
            "cancelled" => AppointmentStatus::Cancelled,
            "completed" => AppointmentStatus::Completed,
            _ => AppointmentStatus::Other(raw),
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// WRITE MODELS
// ==============================================================================

/// Booking payload: an appointment minus the server-generated `id`,
/// `bookingId` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub patient_age: i32,
    pub patient_gender: String,
    pub appointment_date: DateTime<Utc>,
    pub appointment_time: String,
    pub reason: String,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub fee: String,
}

impl NewAppointment {
    /// Wire names of the fields a booking must carry.
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "doctorId",
        "patientName",
        "patientEmail",
        "patientPhone",
        "patientAge",
        "patientGender",
        "appointmentDate",
        "appointmentTime",
        "reason",
        "fee",
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
    pub appointment_date: Option<DateTime<Utc>>,
    pub appointment_time: Option<String>,
}

impl StatusUpdate {
    pub fn status_only(status: AppointmentStatus) -> Self {
        Self {
            status,
            appointment_date: None,
            appointment_time: None,
        }
    }
}

/// `HC-<year>-<sequence>`, sequence zero-padded to three digits.
pub fn format_booking_id(year: i32, sequence: u64) -> String {
    format!("HC-{}-{:03}", year, sequence)
}
