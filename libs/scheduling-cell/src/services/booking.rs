use std::sync::Arc;

use tracing::info;

use shared_models::scheduling::{Appointment, SchedulingError, TimeSlot};
use shared_store::ClinicStore;

// Bounds accepted by the booking validator. The upper bound sits one hour
// past the last grid slot: 17:00 and 17:30 book successfully but occupy no
// slot of the availability grid.
const OPENING_HOUR: i32 = 9;
const LATEST_BOOKABLE_HOUR: i32 = 17;

/// Applies the state-changing scheduling operations: book, cancel, rename.
pub struct BookingService {
    store: Arc<ClinicStore>,
}

impl BookingService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    /// Books a half-hour slot for a doctor. The new appointment's id is the
    /// doctor's calendar length at booking time.
    pub async fn book_appointment(
        &self,
        doctor_id: i32,
        hour: i32,
        minute: i32,
        patient_name: &str,
    ) -> Result<Appointment, SchedulingError> {
        if hour < OPENING_HOUR || hour > LATEST_BOOKABLE_HOUR {
            return Err(SchedulingError::InvalidSlot { hour, minute });
        }
        if minute != 0 && minute != 30 {
            return Err(SchedulingError::InvalidSlot { hour, minute });
        }

        let slot = TimeSlot::new(hour, minute);
        let appointment = self.store.book(doctor_id, slot, patient_name).await?;

        info!(
            "Booked appointment {} for doctor {} at {}",
            appointment.id, doctor_id, slot
        );
        Ok(appointment)
    }

    pub async fn cancel_appointment(
        &self,
        doctor_id: i32,
        appointment_id: i32,
    ) -> Result<(), SchedulingError> {
        self.store.cancel(doctor_id, appointment_id).await?;

        info!(
            "Canceled appointment {} for doctor {}",
            appointment_id, doctor_id
        );
        Ok(())
    }

    /// Renames the patient on an appointment. Canceled appointments stay
    /// editable; the rename does not revive them.
    pub async fn update_patient_name(
        &self,
        doctor_id: i32,
        appointment_id: i32,
        patient_name: &str,
    ) -> Result<(), SchedulingError> {
        self.store
            .update_patient_name(doctor_id, appointment_id, patient_name)
            .await?;

        info!(
            "Updated patient name on appointment {} for doctor {}",
            appointment_id, doctor_id
        );
        Ok(())
    }
}
