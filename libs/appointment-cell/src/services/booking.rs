// libs/appointment-cell/src/services/booking.rs
use chrono::NaiveDateTime;
use tracing::{debug, info};

use doctor_cell::models::TimeSlot;
use doctor_cell::services::AvailabilityService;
use shared_config::AppConfig;

use crate::models::{AppointmentError, AppointmentInsert, AppointmentStatus, BookAppointmentRequest};

/// Turns a patient's selection into the row the hosted backend stores.
///
/// Double-booking is not checked here; the backend rejects the insert if the
/// slot is already taken.
pub struct AppointmentBookingService {
    availability_service: AvailabilityService,
    max_patient_notes_length: usize,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            availability_service: AvailabilityService::new(config),
            max_patient_notes_length: config.max_patient_notes_length,
        }
    }

    pub fn prepare_booking(
        &self,
        request: BookAppointmentRequest,
        reference: NaiveDateTime,
    ) -> Result<AppointmentInsert, AppointmentError> {
        debug!(
            "Preparing booking for user {} with doctor {} on {} at {}",
            request.user_id, request.doctor.id, request.appointment_date, request.time_slot
        );

        let window = request.doctor.to_window()?;
        let date = request.appointment_date;

        if !self.availability_service.is_bookable(date, &window, reference) {
            return Err(AppointmentError::DateNotBookable(date));
        }

        let time_slot: TimeSlot = request.time_slot.trim().parse()?;
        let offered = self.availability_service.slots_for_date(date, &window, reference)?;
        if !offered.contains(&time_slot) {
            return Err(AppointmentError::SlotNotOffered { date, slot: time_slot });
        }

        let patient_notes = request
            .patient_notes
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if patient_notes.chars().count() > self.max_patient_notes_length {
            return Err(AppointmentError::NotesTooLong {
                max: self.max_patient_notes_length,
            });
        }

        info!("Booking prepared for doctor {} on {} at {}", request.doctor.id, date, time_slot);

        Ok(AppointmentInsert {
            doctor_id: request.doctor.id,
            user_id: request.user_id,
            appointment_date: date,
            time_slot,
            patient_notes,
            status: AppointmentStatus::Pending,
        })
    }
}
