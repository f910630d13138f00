use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    // Availability is computed from the doctor record in the request body,
    // so none of these routes touch stored data.
    let public_routes = Router::new()
        .route("/availability/slots", post(handlers::get_slots_for_date))
        .route("/availability/dates", post(handlers::get_bookable_dates))
        .route("/availability/window/slots", post(handlers::generate_window_slots))
        .route("/specializations/icons/{key}", get(handlers::get_specialization_icon));

    Router::new()
        .merge(public_routes)
        .with_state(state)
}
