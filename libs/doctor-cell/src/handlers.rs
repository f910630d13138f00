use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{Datelike, Local};
use serde_json::{json, Value};
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    weekday_name, BookableDatesRequest, BookableDatesResponse, DateAvailabilityResponse,
    SlotsForDateRequest, WindowSlotsRequest,
};
use crate::services::{AvailabilityService, SpecializationIcon};

// ==============================================================================
// AVAILABILITY HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_slots_for_date(
    State(state): State<Arc<AppConfig>>,
    payload: Result<Json<SlotsForDateRequest>, JsonRejection>,
) -> Result<Json<DateAvailabilityResponse>, AppError> {
    let Json(request) = payload?;
    let availability_service = AvailabilityService::new(&state);
    let reference = Local::now().naive_local();

    let window = request.doctor.to_window()?;
    let bookable = availability_service.is_bookable(request.date, &window, reference);
    let slots = availability_service.slots_for_date(request.date, &window, reference)?;

    info!(
        "Doctor {} on {}: bookable={}, {} slots",
        request.doctor.id,
        request.date,
        bookable,
        slots.len()
    );

    Ok(Json(DateAvailabilityResponse {
        doctor_id: request.doctor.id,
        date: request.date,
        weekday: weekday_name(request.date.weekday()).to_string(),
        bookable,
        slots,
    }))
}

#[axum::debug_handler]
pub async fn get_bookable_dates(
    State(state): State<Arc<AppConfig>>,
    payload: Result<Json<BookableDatesRequest>, JsonRejection>,
) -> Result<Json<BookableDatesResponse>, AppError> {
    let Json(request) = payload?;
    let availability_service = AvailabilityService::new(&state);
    let reference = Local::now().naive_local();

    let days = request.days.unwrap_or(state.booking_horizon_days);
    if days == 0 || days > state.booking_horizon_days {
        return Err(AppError::ValidationError(format!(
            "days must be between 1 and {}",
            state.booking_horizon_days
        )));
    }

    let from = request.from.unwrap_or_else(|| reference.date());
    let window = request.doctor.to_window()?;
    let dates = availability_service.bookable_dates(&window, from, days, reference)?;

    Ok(Json(BookableDatesResponse {
        doctor_id: request.doctor.id,
        from,
        days,
        dates,
    }))
}

#[axum::debug_handler]
pub async fn generate_window_slots(
    State(state): State<Arc<AppConfig>>,
    payload: Result<Json<WindowSlotsRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let availability_service = AvailabilityService::new(&state);

    let window = request.window.to_window()?;
    let slots = availability_service.generate_slots(&window)?;

    Ok(Json(json!({
        "slots": slots,
        "total": slots.len()
    })))
}

// ==============================================================================
// SPECIALIZATION HANDLERS
// ==============================================================================

pub async fn get_specialization_icon(Path(key): Path<String>) -> Json<Value> {
    let lookup = SpecializationIcon::from_key(Some(key.as_str()));

    Json(json!(lookup))
}
