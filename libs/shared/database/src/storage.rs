use async_trait::async_trait;

use shared_models::{
    Appointment, Doctor, Hospital, NewAppointment, NewDoctor, NewHospital, NewTimeSlot, NewUser,
    StatusUpdate, TimeSlot, User,
};

use crate::error::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value access to the booking tables. Lookups by id return `None` when
/// absent; filters are plain scans with no index behind them.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    /// Fails with `StorageError::Duplicate` when the username is taken.
    async fn create_user(&self, user: NewUser) -> StorageResult<User>;

    // Doctors
    async fn get_doctors(&self) -> StorageResult<Vec<Doctor>>;
    async fn get_doctor(&self, id: &str) -> StorageResult<Option<Doctor>>;
    /// Case-insensitive equality on specialization.
    async fn get_doctors_by_specialization(&self, specialization: &str) -> StorageResult<Vec<Doctor>>;
    /// Case-insensitive substring on location.
    async fn get_doctors_by_location(&self, location: &str) -> StorageResult<Vec<Doctor>>;
    /// Case-insensitive substring on name, specialization or hospital.
    async fn search_doctors(&self, query: &str) -> StorageResult<Vec<Doctor>>;
    async fn create_doctor(&self, doctor: NewDoctor) -> StorageResult<Doctor>;

    // Appointments
    async fn get_appointments(&self) -> StorageResult<Vec<Appointment>>;
    async fn get_appointment(&self, id: &str) -> StorageResult<Option<Appointment>>;
    /// Exact match on patient email.
    async fn get_appointments_by_patient_email(&self, email: &str) -> StorageResult<Vec<Appointment>>;
    async fn get_appointments_by_doctor(&self, doctor_id: &str) -> StorageResult<Vec<Appointment>>;
    /// Assigns `id`, `bookingId` and `createdAt`. Does not check slot conflicts.
    async fn create_appointment(&self, appointment: NewAppointment) -> StorageResult<Appointment>;
    async fn update_appointment_status(
        &self,
        id: &str,
        update: StatusUpdate,
    ) -> StorageResult<Option<Appointment>>;
    /// Hard delete. Returns whether a record was removed.
    async fn delete_appointment(&self, id: &str) -> StorageResult<bool>;

    // Hospitals
    async fn get_hospitals(&self) -> StorageResult<Vec<Hospital>>;
    async fn get_hospital(&self, id: &str) -> StorageResult<Option<Hospital>>;
    async fn create_hospital(&self, hospital: NewHospital) -> StorageResult<Hospital>;

    // Time slots
    /// `date` is `YYYY-MM-DD`, compared against each slot's UTC date.
    async fn get_time_slots(&self, doctor_id: &str, date: &str) -> StorageResult<Vec<TimeSlot>>;
    async fn create_time_slot(&self, time_slot: NewTimeSlot) -> StorageResult<TimeSlot>;
    async fn update_time_slot_availability(
        &self,
        id: &str,
        is_available: bool,
    ) -> StorageResult<Option<TimeSlot>>;
}
