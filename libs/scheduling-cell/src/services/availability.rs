use std::sync::Arc;

use tracing::debug;

use shared_models::scheduling::{SchedulingError, TimeSlot};
use shared_store::ClinicStore;

/// Computes which grid slots are open for a doctor.
pub struct AvailabilityService {
    store: Arc<ClinicStore>,
}

impl AvailabilityService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    /// Every grid slot without a live appointment, in grid order. An
    /// unknown doctor id is an error, distinct from a doctor whose day is
    /// fully booked.
    pub async fn available_slots(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<TimeSlot>, SchedulingError> {
        let doctor = self
            .store
            .find_doctor(doctor_id)
            .await
            .ok_or(SchedulingError::DoctorNotFound(doctor_id))?;

        let open: Vec<TimeSlot> = TimeSlot::day_grid()
            .into_iter()
            .filter(|slot| {
                !doctor
                    .calendar
                    .iter()
                    .any(|appointment| !appointment.canceled && appointment.time == *slot)
            })
            .collect();

        debug!("Doctor {} has {} open slots", doctor_id, open.len());
        Ok(open)
    }
}
