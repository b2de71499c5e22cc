pub mod appointment;
pub mod doctor;
pub mod error;
pub mod hospital;
pub mod time_slot;
pub mod user;

pub use appointment::{format_booking_id, Appointment, AppointmentStatus, NewAppointment, StatusUpdate};
pub use doctor::{Doctor, NewDoctor};
pub use error::{AppError, FieldError};
pub use hospital::{Hospital, NewHospital};
pub use time_slot::{NewTimeSlot, TimeSlot};
pub use user::{NewUser, User};
