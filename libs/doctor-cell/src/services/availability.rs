use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use shared_config::{AppConfig, SameDayPolicy};

use crate::models::{AvailabilityError, AvailabilityWindow, TimeSlot};

const SLOT_MINUTES: [u32; 2] = [0, 30];

/// Pure slot and bookable-date calculations over a doctor's weekly window.
///
/// Nothing here reads the wall clock: callers pass the reference instant.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    same_day_policy: SameDayPolicy,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_policy(config.same_day_policy)
    }

    pub fn with_policy(same_day_policy: SameDayPolicy) -> Self {
        Self { same_day_policy }
    }

    /// Whether `date` can be booked as seen from `reference`.
    ///
    /// The weekday must be one of the window's days and the date must not be
    /// before the reference day. How the reference day itself is handled
    /// depends on the configured [`SameDayPolicy`].
    pub fn is_bookable(
        &self,
        date: NaiveDate,
        window: &AvailabilityWindow,
        reference: NaiveDateTime,
    ) -> bool {
        if !window.includes(date.weekday()) {
            return false;
        }

        let today = reference.date();
        if date < today {
            return false;
        }
        if date > today {
            return true;
        }

        match self.same_day_policy {
            SameDayPolicy::CalendarDay => true,
            SameDayPolicy::UntilLastSlot => match window.last_slot() {
                Ok(last) => reference.time() <= last.time(),
                Err(_) => false,
            },
        }
    }

    /// Every half-hour slot from `start_hour:00` up to, not including, `end_hour:00`.
    pub fn generate_slots(&self, window: &AvailabilityWindow) -> Result<Vec<TimeSlot>, AvailabilityError> {
        window.validate()?;

        let slots = (window.start_hour..window.end_hour)
            .flat_map(|hour| SLOT_MINUTES.into_iter().map(move |minute| (hour, minute)))
            .map(|(hour, minute)| TimeSlot::new(hour, minute))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Generated {} slots for window {:02}:00-{:02}:00",
            slots.len(),
            window.start_hour,
            window.end_hour
        );

        Ok(slots)
    }

    /// Slots that can be offered on a specific date.
    pub fn slots_for_date(
        &self,
        date: NaiveDate,
        window: &AvailabilityWindow,
        reference: NaiveDateTime,
    ) -> Result<Vec<TimeSlot>, AvailabilityError> {
        let slots = self.generate_slots(window)?;

        if !self.is_bookable(date, window, reference) {
            debug!("{} is not bookable, no slots offered", date);
            return Ok(Vec::new());
        }

        if self.same_day_policy == SameDayPolicy::UntilLastSlot && date == reference.date() {
            let now = reference.time();
            return Ok(slots.into_iter().filter(|slot| slot.time() >= now).collect());
        }

        Ok(slots)
    }

    /// Bookable dates in `[from, from + days)`, ascending.
    pub fn bookable_dates(
        &self,
        window: &AvailabilityWindow,
        from: NaiveDate,
        days: u32,
        reference: NaiveDateTime,
    ) -> Result<Vec<NaiveDate>, AvailabilityError> {
        window.validate()?;

        let dates: Vec<NaiveDate> = from
            .iter_days()
            .take(days as usize)
            .filter(|date| self.is_bookable(*date, window, reference))
            .collect();

        debug!("Found {} bookable dates in {} days from {}", dates.len(), days, from);
        Ok(dates)
    }
}
