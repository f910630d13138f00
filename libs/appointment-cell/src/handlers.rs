// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    AppointmentError, AppointmentInsert, BookAppointmentRequest, CancelAppointmentRequest,
};
use crate::services::{AppointmentBookingService, AppointmentLifecycleService};

fn map_appointment_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::InvalidStatusTransition(status) => {
            AppError::Conflict(format!("Cannot cancel appointment in status: {}", status))
        }
        other => AppError::ValidationError(other.to_string()),
    }
}

// ==============================================================================
// BOOKING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn prepare_booking(
    State(state): State<Arc<AppConfig>>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentInsert>, AppError> {
    let Json(request) = payload?;
    let booking_service = AppointmentBookingService::new(&state);
    let reference = Local::now().naive_local();

    let insert = booking_service
        .prepare_booking(request, reference)
        .map_err(map_appointment_error)?;

    Ok(Json(insert))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    Path(appointment_id): Path<Uuid>,
    payload: Result<Json<CancelAppointmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let lifecycle_service = AppointmentLifecycleService::new();

    let update = lifecycle_service
        .cancellation_update(request.status)
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "appointment_id": appointment_id,
        "update": update
    })))
}
