use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

pub fn scheduling_routes(state: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .route(
            "/doctors/{doctor_id}/availability",
            get(handlers::get_doctor_availability),
        )
        .route(
            "/doctors/{doctor_id}/appointments",
            post(handlers::book_appointment),
        )
        .route(
            "/doctors/{doctor_id}/appointments/{appointment_id}/cancel",
            post(handlers::cancel_appointment),
        )
        .route(
            "/doctors/{doctor_id}/appointments/{appointment_id}",
            patch(handlers::update_appointment),
        )
        .route("/appointments", get(handlers::list_appointments))
        .route("/timeslots", get(handlers::list_timeslots))
        .with_state(state)
}
