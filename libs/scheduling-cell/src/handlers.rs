use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use shared_models::error::AppError;
use shared_models::scheduling::{Appointment, Doctor, TimeSlot};
use shared_store::ClinicStore;

use crate::models::{BookAppointmentRequest, UpdateAppointmentRequest};
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn list_doctors(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Doctor>> {
    Json(store.list_doctors().await)
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(store): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = store
        .find_doctor(doctor_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn list_appointments(State(store): State<Arc<ClinicStore>>) -> Json<Vec<Appointment>> {
    Json(store.list_appointments().await)
}

#[axum::debug_handler]
pub async fn list_timeslots() -> Json<Vec<TimeSlot>> {
    Json(TimeSlot::day_grid())
}

/// A fully booked day is `200` with an empty list; only an unknown doctor
/// id is `404`.
#[axum::debug_handler]
pub async fn get_doctor_availability(
    State(store): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let service = AvailabilityService::new(store);
    let slots = service
        .available_slots(doctor_id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(slots))
}

/// Mutations answer with a plain boolean: a domain rejection logs a warning
/// and comes back as `false` with status 200, never as an error status.
#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path(doctor_id): Path<i32>,
    Json(request): Json<BookAppointmentRequest>,
) -> Json<bool> {
    let service = BookingService::new(store);

    match service
        .book_appointment(doctor_id, request.hour, request.minute, &request.patient_name)
        .await
    {
        Ok(_) => Json(true),
        Err(e) => {
            warn!("Booking rejected for doctor {}: {}", doctor_id, e);
            Json(false)
        }
    }
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path((doctor_id, appointment_id)): Path<(i32, i32)>,
) -> Json<bool> {
    let service = BookingService::new(store);

    match service.cancel_appointment(doctor_id, appointment_id).await {
        Ok(()) => Json(true),
        Err(e) => {
            warn!(
                "Cancellation rejected for appointment {} of doctor {}: {}",
                appointment_id, doctor_id, e
            );
            Json(false)
        }
    }
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path((doctor_id, appointment_id)): Path<(i32, i32)>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Json<bool> {
    let service = BookingService::new(store);

    match service
        .update_patient_name(doctor_id, appointment_id, &request.patient_name)
        .await
    {
        Ok(()) => Json(true),
        Err(e) => {
            warn!(
                "Update rejected for appointment {} of doctor {}: {}",
                appointment_id, doctor_id, e
            );
            Json(false)
        }
    }
}
