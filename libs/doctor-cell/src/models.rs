use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Invalid availability window: {0}")]
    InvalidWindow(String),

    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),

    #[error("Invalid {field} value: {value}")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// ==============================================================================
// WEEKDAYS
// ==============================================================================

/// Locale-independent English name of a weekday, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Accepts full names and three-letter abbreviations, case-insensitively.
pub fn parse_weekday(name: &str) -> Result<Weekday, AvailabilityError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| AvailabilityError::UnknownWeekday(name.to_string()))
}

/// Collapses duplicates; fails on the first unknown name.
pub fn parse_weekdays(names: &[String]) -> Result<HashSet<Weekday>, AvailabilityError> {
    names.iter().map(|name| parse_weekday(name)).collect()
}

fn serialize_weekdays<S>(days: &HashSet<Weekday>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut ordered: Vec<&Weekday> = days.iter().collect();
    ordered.sort_by_key(|day| day.num_days_from_monday());
    serializer.collect_seq(ordered.into_iter().map(|day| weekday_name(*day)))
}

// ==============================================================================
// AVAILABILITY WINDOW
// ==============================================================================

/// A doctor's recurring weekly bookable days and hours.
///
/// Hours are whole hours of the day; `end_hour` is exclusive. The window is
/// only checked when slots are generated from it, so a window built from
/// request data may be invalid until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityWindow {
    #[serde(serialize_with = "serialize_weekdays")]
    pub days: HashSet<Weekday>,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl AvailabilityWindow {
    pub fn new(days: impl IntoIterator<Item = Weekday>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            days: days.into_iter().collect(),
            start_hour,
            end_hour,
        }
    }

    pub fn validate(&self) -> Result<(), AvailabilityError> {
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(AvailabilityError::InvalidWindow(format!(
                "hours must be within 0-23, got {}-{}",
                self.start_hour, self.end_hour
            )));
        }

        if self.start_hour >= self.end_hour {
            return Err(AvailabilityError::InvalidWindow(format!(
                "start hour {} must be before end hour {}",
                self.start_hour, self.end_hour
            )));
        }

        Ok(())
    }

    pub fn includes(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn last_slot(&self) -> Result<TimeSlot, AvailabilityError> {
        self.validate()?;
        TimeSlot::new(self.end_hour - 1, 30)
    }
}

// ==============================================================================
// TIME SLOT
// ==============================================================================

/// A bookable half-hour label, always rendered as `HH:MM` with minutes 00 or 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Result<Self, AvailabilityError> {
        if minute != 0 && minute != 30 {
            return Err(AvailabilityError::InvalidTimeSlot(format!("{:02}:{:02}", hour, minute)));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| AvailabilityError::InvalidTimeSlot(format!("{:02}:{:02}", hour, minute)))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = AvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AvailabilityError::InvalidTimeSlot(s.to_string());

        if s.len() != 5 || s.as_bytes()[2] != b':' {
            return Err(invalid());
        }

        let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid())?;
        TimeSlot::new(time.hour(), time.minute())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// DOCTOR RECORD
// ==============================================================================

/// The availability fields of a `doctors` row as the hosted backend returns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorAvailabilityRecord {
    pub id: Uuid,
    #[serde(default)]
    pub available_days: Option<Vec<String>>,
    #[serde(default)]
    pub available_time_start: Option<String>,
    #[serde(default)]
    pub available_time_end: Option<String>,
}

impl DoctorAvailabilityRecord {
    /// Only the hour of each time column is used; minutes are ignored.
    pub fn to_window(&self) -> Result<AvailabilityWindow, AvailabilityError> {
        let days = match &self.available_days {
            Some(names) => parse_weekdays(names)?,
            None => HashSet::new(),
        };

        let start_hour = parse_hour("available_time_start", self.available_time_start.as_deref())?;
        let end_hour = parse_hour("available_time_end", self.available_time_end.as_deref())?;

        Ok(AvailabilityWindow {
            days,
            start_hour,
            end_hour,
        })
    }
}

fn parse_hour(field: &'static str, value: Option<&str>) -> Result<u32, AvailabilityError> {
    let raw = value.ok_or_else(|| AvailabilityError::InvalidTime {
        field,
        value: "null".to_string(),
    })?;

    NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M"))
        .map(|time| time.hour())
        .map_err(|_| AvailabilityError::InvalidTime {
            field,
            value: raw.to_string(),
        })
}

// ==============================================================================
// REQUESTS / RESPONSES
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsForDateRequest {
    pub doctor: DoctorAvailabilityRecord,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookableDatesRequest {
    pub doctor: DoctorAvailabilityRecord,
    pub from: Option<NaiveDate>,
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowSlotsRequest {
    pub window: AvailabilityWindowRequest,
}

/// A window as sent by a client; weekday names are checked on conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityWindowRequest {
    pub days: Vec<String>,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl AvailabilityWindowRequest {
    pub fn to_window(&self) -> Result<AvailabilityWindow, AvailabilityError> {
        Ok(AvailabilityWindow {
            days: parse_weekdays(&self.days)?,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DateAvailabilityResponse {
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub weekday: String,
    pub bookable: bool,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookableDatesResponse {
    pub doctor_id: Uuid,
    pub from: NaiveDate,
    pub days: u32,
    pub dates: Vec<NaiveDate>,
}
