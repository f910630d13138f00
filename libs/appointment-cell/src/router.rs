// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    let booking_routes = Router::new()
        .route("/prepare", post(handlers::prepare_booking))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment));

    Router::new()
        .merge(booking_routes)
        .with_state(state)
}
