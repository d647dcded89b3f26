use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A bookable position in the daily grid. Equality is structural, so two
/// slots with the same hour and minute are the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub hour: i32,
    pub minute: i32,
}

impl TimeSlot {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// The fixed daily grid every doctor books against: 09:00 through
    /// 16:30 in half-hour steps, ascending.
    pub fn day_grid() -> Vec<TimeSlot> {
        (9..=16)
            .flat_map(|hour| [TimeSlot::new(hour, 0), TimeSlot::new(hour, 30)])
            .collect()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub clinic_name: String,
    pub specialty: String,
    pub calendar: Vec<Appointment>,
}

/// One calendar entry. `id` is the doctor-scoped sequence number assigned
/// at booking time; ids are only unique within a single calendar, so every
/// lookup takes the `(doctor id, appointment id)` pair. Canceled entries
/// stay in the calendar forever and no longer block their slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub patient_name: String,
    #[serde(rename = "doctorID")]
    pub doctor_id: i32,
    pub time: TimeSlot,
    pub canceled: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Doctor {0} not found")]
    DoctorNotFound(i32),

    #[error("Appointment {appointment_id} not found for doctor {doctor_id}")]
    AppointmentNotFound { doctor_id: i32, appointment_id: i32 },

    #[error("Appointment {appointment_id} for doctor {doctor_id} is already canceled")]
    AlreadyCanceled { doctor_id: i32, appointment_id: i32 },

    #[error("Doctor {doctor_id} is not available at {slot}")]
    SlotTaken { doctor_id: i32, slot: TimeSlot },

    #[error("Invalid time slot {hour:02}:{minute:02}")]
    InvalidSlot { hour: i32, minute: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_grid_covers_the_working_day_in_order() {
        let grid = TimeSlot::day_grid();

        assert_eq!(grid.len(), 16);
        assert_eq!(grid[0], TimeSlot::new(9, 0));
        assert_eq!(grid[15], TimeSlot::new(16, 30));
        assert!(grid
            .windows(2)
            .all(|pair| (pair[0].hour, pair[0].minute) < (pair[1].hour, pair[1].minute)));
    }

    #[test]
    fn time_slot_equality_is_structural() {
        assert_eq!(TimeSlot::new(9, 0), TimeSlot::new(9, 0));
        assert_ne!(TimeSlot::new(9, 0), TimeSlot::new(9, 30));
    }

    #[test]
    fn appointment_serializes_with_wire_field_names() {
        let appointment = Appointment {
            id: 0,
            patient_name: "patient1".to_string(),
            doctor_id: 0,
            time: TimeSlot::new(10, 30),
            canceled: false,
        };

        let json = serde_json::to_value(&appointment).unwrap();

        assert_eq!(json["patientName"], "patient1");
        assert_eq!(json["doctorID"], 0);
        assert_eq!(json["time"]["hour"], 10);
        assert_eq!(json["time"]["minute"], 30);
        assert_eq!(json["canceled"], false);
    }

    #[test]
    fn doctor_serializes_clinic_name_in_camel_case() {
        let doctor = Doctor {
            id: 1,
            name: "doctor2".to_string(),
            clinic_name: "clinic2".to_string(),
            specialty: "gynecologist".to_string(),
            calendar: vec![],
        };

        let json = serde_json::to_value(&doctor).unwrap();

        assert_eq!(json["clinicName"], "clinic2");
        assert!(json["calendar"].as_array().unwrap().is_empty());
    }
}
