// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, info, warn};

use crate::models::{AppointmentError, AppointmentStatus, AppointmentStatusUpdate};

#[derive(Debug, Default, Clone, Copy)]
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition from {:?} to {:?}", current_status, new_status);

        if !self.get_valid_transitions(current_status).contains(&new_status) {
            warn!("Invalid status transition attempted: {:?} -> {:?}", current_status, new_status);
            return Err(AppointmentError::InvalidStatusTransition(current_status));
        }

        Ok(())
    }

    /// Get all valid next statuses for a given current status
    pub fn get_valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            // Terminal states
            AppointmentStatus::Completed => vec![],
            AppointmentStatus::Cancelled => vec![],
        }
    }

    /// Patients may only withdraw requests the clinic has not confirmed yet.
    pub fn can_patient_cancel(&self, current_status: AppointmentStatus) -> bool {
        current_status == AppointmentStatus::Pending
    }

    /// The update to send to the hosted backend when a patient cancels.
    pub fn cancellation_update(
        &self,
        current_status: AppointmentStatus,
    ) -> Result<AppointmentStatusUpdate, AppointmentError> {
        if !self.can_patient_cancel(current_status) {
            warn!("Patient cancellation refused for appointment in status {}", current_status);
            return Err(AppointmentError::InvalidStatusTransition(current_status));
        }

        info!("Cancellation prepared for {} appointment", current_status);
        Ok(AppointmentStatusUpdate {
            status: AppointmentStatus::Cancelled,
        })
    }
}
