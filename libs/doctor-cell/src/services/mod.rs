pub mod doctor;
pub mod time_slot;

pub use doctor::DoctorService;
pub use time_slot::TimeSlotService;
