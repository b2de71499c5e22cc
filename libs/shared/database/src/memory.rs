use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{
    format_booking_id, Appointment, Doctor, Hospital, NewAppointment, NewDoctor, NewHospital,
    NewTimeSlot, NewUser, StatusUpdate, TimeSlot, User,
};

use crate::error::StorageError;
use crate::seed;
use crate::storage::{Storage, StorageResult};

/// Id-keyed rows that list back in insertion order.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, id: String, row: T) {
        if self.rows.insert(id.clone(), row).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).cloned()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    fn remove(&mut self, id: &str) -> bool {
        if self.rows.remove(id).is_none() {
            return false;
        }
        self.order.retain(|key| key != id);
        true
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    fn all(&self) -> Vec<T> {
        self.values().cloned().collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.values().filter(|row| predicate(row)).cloned().collect()
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-process store. Each table has its own lock, and every storage call takes
/// exactly one of them, so there is nothing spanning tables to keep atomic.
pub struct MemStorage {
    users: RwLock<Table<User>>,
    doctors: RwLock<Table<Doctor>>,
    appointments: RwLock<Table<Appointment>>,
    hospitals: RwLock<Table<Hospital>>,
    time_slots: RwLock<Table<TimeSlot>>,
    // Never reused, so deleting appointments cannot yield a repeated booking id.
    booking_sequence: AtomicU64,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_directory(Vec::new(), Vec::new())
    }

    /// Store pre-populated with the demo doctors and hospitals.
    pub fn seeded() -> Self {
        let store = Self::with_directory(seed::mock_doctors(), seed::mock_hospitals());
        info!("Seeded in-memory store with demo doctors and hospitals");
        store
    }

    fn with_directory(doctors: Vec<NewDoctor>, hospitals: Vec<NewHospital>) -> Self {
        let mut doctor_table = Table::default();
        for new in doctors {
            let id = generate_id();
            doctor_table.insert(id.clone(), Doctor::from_new(id, new));
        }

        let mut hospital_table = Table::default();
        for new in hospitals {
            let id = generate_id();
            hospital_table.insert(id.clone(), Hospital::from_new(id, new));
        }

        Self {
            users: RwLock::new(Table::default()),
            doctors: RwLock::new(doctor_table),
            appointments: RwLock::new(Table::default()),
            hospitals: RwLock::new(hospital_table),
            time_slots: RwLock::new(Table::default()),
            booking_sequence: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.username == user.username) {
            return Err(StorageError::Duplicate {
                table: "users",
                key: user.username,
            });
        }

        let id = generate_id();
        let user = User::from_new(id.clone(), user);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_doctors(&self) -> StorageResult<Vec<Doctor>> {
        Ok(self.doctors.read().await.all())
    }

    async fn get_doctor(&self, id: &str) -> StorageResult<Option<Doctor>> {
        Ok(self.doctors.read().await.get(id))
    }

    async fn get_doctors_by_specialization(&self, specialization: &str) -> StorageResult<Vec<Doctor>> {
        let wanted = specialization.to_lowercase();
        Ok(self
            .doctors
            .read()
            .await
            .filter(|doctor| doctor.specialization.to_lowercase() == wanted))
    }

    async fn get_doctors_by_location(&self, location: &str) -> StorageResult<Vec<Doctor>> {
        let wanted = location.to_lowercase();
        Ok(self
            .doctors
            .read()
            .await
            .filter(|doctor| doctor.location.to_lowercase().contains(&wanted)))
    }

    async fn search_doctors(&self, query: &str) -> StorageResult<Vec<Doctor>> {
        let lower_query = query.to_lowercase();
        Ok(self
            .doctors
            .read()
            .await
            .filter(|doctor| doctor.matches_query(&lower_query)))
    }

    async fn create_doctor(&self, doctor: NewDoctor) -> StorageResult<Doctor> {
        let id = generate_id();
        let doctor = Doctor::from_new(id.clone(), doctor);
        self.doctors.write().await.insert(id, doctor.clone());
        Ok(doctor)
    }

    async fn get_appointments(&self) -> StorageResult<Vec<Appointment>> {
        Ok(self.appointments.read().await.all())
    }

    async fn get_appointment(&self, id: &str) -> StorageResult<Option<Appointment>> {
        Ok(self.appointments.read().await.get(id))
    }

    async fn get_appointments_by_patient_email(&self, email: &str) -> StorageResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .read()
            .await
            .filter(|appointment| appointment.patient_email == email))
    }

    async fn get_appointments_by_doctor(&self, doctor_id: &str) -> StorageResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .read()
            .await
            .filter(|appointment| appointment.doctor_id == doctor_id))
    }

    async fn create_appointment(&self, appointment: NewAppointment) -> StorageResult<Appointment> {
        let mut appointments = self.appointments.write().await;

        let created_at = Utc::now();
        let sequence = self.booking_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let booking_id = format_booking_id(created_at.year(), sequence);
        let id = generate_id();

        let appointment = Appointment::from_new(id.clone(), booking_id, created_at, appointment);
        appointments.insert(id, appointment.clone());

        debug!("Stored appointment {} ({})", appointment.id, appointment.booking_id);
        Ok(appointment)
    }

    async fn update_appointment_status(
        &self,
        id: &str,
        update: StatusUpdate,
    ) -> StorageResult<Option<Appointment>> {
        let mut appointments = self.appointments.write().await;
        Ok(appointments.get_mut(id).map(|appointment| {
            appointment.apply(update);
            appointment.clone()
        }))
    }

    async fn delete_appointment(&self, id: &str) -> StorageResult<bool> {
        Ok(self.appointments.write().await.remove(id))
    }

    async fn get_hospitals(&self) -> StorageResult<Vec<Hospital>> {
        Ok(self.hospitals.read().await.all())
    }

    async fn get_hospital(&self, id: &str) -> StorageResult<Option<Hospital>> {
        Ok(self.hospitals.read().await.get(id))
    }

    async fn create_hospital(&self, hospital: NewHospital) -> StorageResult<Hospital> {
        let id = generate_id();
        let hospital = Hospital::from_new(id.clone(), hospital);
        self.hospitals.write().await.insert(id, hospital.clone());
        Ok(hospital)
    }

    async fn get_time_slots(&self, doctor_id: &str, date: &str) -> StorageResult<Vec<TimeSlot>> {
        Ok(self
            .time_slots
            .read()
            .await
            .filter(|slot| slot.doctor_id == doctor_id && slot.falls_on(date)))
    }

    async fn create_time_slot(&self, time_slot: NewTimeSlot) -> StorageResult<TimeSlot> {
        let id = generate_id();
        let time_slot = TimeSlot::from_new(id.clone(), time_slot);
        self.time_slots.write().await.insert(id, time_slot.clone());
        Ok(time_slot)
    }

    async fn update_time_slot_availability(
        &self,
        id: &str,
        is_available: bool,
    ) -> StorageResult<Option<TimeSlot>> {
        let mut time_slots = self.time_slots.write().await;
        Ok(time_slots.get_mut(id).map(|slot| {
            slot.is_available = is_available;
            slot.clone()
        }))
    }
}
