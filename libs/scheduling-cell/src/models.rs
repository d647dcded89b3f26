use serde::Deserialize;

pub use shared_models::scheduling::{Appointment, Doctor, SchedulingError, TimeSlot};

/// Booking request body. The time arrives as raw grid coordinates and is
/// validated against the daily grid by the booking service.
#[derive(Debug, Deserialize)]
pub struct BookAppointmentRequest {
    pub hour: i32,
    pub minute: i32,
    #[serde(rename = "patientName")]
    pub patient_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(rename = "patientName")]
    pub patient_name: String,
}
