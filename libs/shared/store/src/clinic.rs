use tokio::sync::RwLock;
use tracing::{debug, info};

use shared_models::scheduling::{Appointment, Doctor, SchedulingError, TimeSlot};

/// In-memory owner of every doctor and appointment record. State lives for
/// the lifetime of the process and resets on restart.
///
/// Each doctor's calendar owns its appointment records; the global
/// appointment view is a log of (doctor id, calendar index) pairs resolved
/// on read, so an in-place cancellation or rename shows up in both views.
/// Calendar indices are stable because appointments are never removed.
pub struct ClinicStore {
    inner: RwLock<ClinicState>,
}

struct ClinicState {
    doctors: Vec<Doctor>,
    log: Vec<LogEntry>,
}

#[derive(Clone, Copy)]
struct LogEntry {
    doctor_id: i32,
    calendar_index: usize,
}

impl ClinicStore {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        let log = doctors
            .iter()
            .flat_map(|doctor| {
                let doctor_id = doctor.id;
                (0..doctor.calendar.len()).map(move |calendar_index| LogEntry {
                    doctor_id,
                    calendar_index,
                })
            })
            .collect();

        Self {
            inner: RwLock::new(ClinicState { doctors, log }),
        }
    }

    /// The dataset the service launches with: two doctors, one pre-booked
    /// appointment each. Doctor 1's appointment keeps its historical id 1
    /// rather than the per-calendar sequence value.
    pub fn seeded() -> Self {
        let doctors = vec![
            Doctor {
                id: 0,
                name: "doctor1".to_string(),
                clinic_name: "clinic1".to_string(),
                specialty: "gynecologist".to_string(),
                calendar: vec![Appointment {
                    id: 0,
                    patient_name: "patient1".to_string(),
                    doctor_id: 0,
                    time: TimeSlot::new(10, 30),
                    canceled: false,
                }],
            },
            Doctor {
                id: 1,
                name: "doctor2".to_string(),
                clinic_name: "clinic2".to_string(),
                specialty: "gynecologist".to_string(),
                calendar: vec![Appointment {
                    id: 1,
                    patient_name: "patient2".to_string(),
                    doctor_id: 1,
                    time: TimeSlot::new(11, 0),
                    canceled: false,
                }],
            },
        ];

        let store = Self::new(doctors);
        info!("Seeded clinic store with 2 doctors and 2 appointments");
        store
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.inner.read().await.doctors.clone()
    }

    pub async fn find_doctor(&self, doctor_id: i32) -> Option<Doctor> {
        self.inner
            .read()
            .await
            .doctors
            .iter()
            .find(|doctor| doctor.id == doctor_id)
            .cloned()
    }

    /// Every appointment ever booked, across all doctors, in booking order.
    pub async fn list_appointments(&self) -> Vec<Appointment> {
        let state = self.inner.read().await;
        state
            .log
            .iter()
            .filter_map(|entry| {
                state
                    .doctors
                    .iter()
                    .find(|doctor| doctor.id == entry.doctor_id)
                    .and_then(|doctor| doctor.calendar.get(entry.calendar_index))
                    .cloned()
            })
            .collect()
    }

    /// Books `slot` for a doctor. The occupancy check and both appends run
    /// under one write lock, so two concurrent bookings cannot both see the
    /// slot as free.
    pub async fn book(
        &self,
        doctor_id: i32,
        slot: TimeSlot,
        patient_name: &str,
    ) -> Result<Appointment, SchedulingError> {
        let mut state = self.inner.write().await;
        let doctor = state
            .doctors
            .iter_mut()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or(SchedulingError::DoctorNotFound(doctor_id))?;

        if doctor
            .calendar
            .iter()
            .any(|appointment| !appointment.canceled && appointment.time == slot)
        {
            return Err(SchedulingError::SlotTaken { doctor_id, slot });
        }

        let calendar_index = doctor.calendar.len();
        let appointment = Appointment {
            id: calendar_index as i32,
            patient_name: patient_name.to_string(),
            doctor_id,
            time: slot,
            canceled: false,
        };

        doctor.calendar.push(appointment.clone());
        state.log.push(LogEntry {
            doctor_id,
            calendar_index,
        });

        debug!("Stored appointment {} for doctor {}", appointment.id, doctor_id);
        Ok(appointment)
    }

    /// Cancels the first live calendar entry with this id. Cancellation is
    /// terminal; a second cancel of the same entry fails.
    pub async fn cancel(
        &self,
        doctor_id: i32,
        appointment_id: i32,
    ) -> Result<(), SchedulingError> {
        let mut state = self.inner.write().await;
        let doctor = state
            .doctors
            .iter_mut()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or(SchedulingError::DoctorNotFound(doctor_id))?;

        let mut saw_canceled = false;
        for appointment in doctor
            .calendar
            .iter_mut()
            .filter(|appointment| appointment.id == appointment_id)
        {
            if appointment.canceled {
                saw_canceled = true;
                continue;
            }
            appointment.canceled = true;
            return Ok(());
        }

        if saw_canceled {
            Err(SchedulingError::AlreadyCanceled {
                doctor_id,
                appointment_id,
            })
        } else {
            Err(SchedulingError::AppointmentNotFound {
                doctor_id,
                appointment_id,
            })
        }
    }

    /// Renames the patient on the first calendar entry with this id,
    /// whether live or canceled.
    pub async fn update_patient_name(
        &self,
        doctor_id: i32,
        appointment_id: i32,
        patient_name: &str,
    ) -> Result<(), SchedulingError> {
        let mut state = self.inner.write().await;
        let doctor = state
            .doctors
            .iter_mut()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or(SchedulingError::DoctorNotFound(doctor_id))?;

        let appointment = doctor
            .calendar
            .iter_mut()
            .find(|appointment| appointment.id == appointment_id)
            .ok_or(SchedulingError::AppointmentNotFound {
                doctor_id,
                appointment_id,
            })?;

        appointment.patient_name = patient_name.to_string();
        Ok(())
    }
}
