use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookable slot for a doctor. Nothing populates these yet; the timeslot
/// endpoint reads from an empty table until slot generation exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub doctor_id: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeSlot {
    pub doctor_id: String,
    pub date: DateTime<Utc>,
    pub time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl TimeSlot {
    pub fn from_new(id: String, new: NewTimeSlot) -> Self {
        Self {
            id,
            doctor_id: new.doctor_id,
            date: new.date,
            time: new.time,
            is_available: new.is_available,
        }
    }

    /// Compares the slot's UTC calendar date against a `YYYY-MM-DD` string.
    pub fn falls_on(&self, date: &str) -> bool {
        self.date.date_naive().format("%Y-%m-%d").to_string() == date
    }
}
