use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 90;
const DEFAULT_MAX_PATIENT_NOTES_LENGTH: usize = 1000;

/// How a date equal to the reference day is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameDayPolicy {
    /// Compare calendar dates only; today is bookable all day.
    #[default]
    CalendarDay,
    /// Today stays bookable until the start of the last slot has passed.
    UntilLastSlot,
}

impl fmt::Display for SameDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameDayPolicy::CalendarDay => write!(f, "calendar_day"),
            SameDayPolicy::UntilLastSlot => write!(f, "until_last_slot"),
        }
    }
}

impl FromStr for SameDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar_day" => Ok(SameDayPolicy::CalendarDay),
            "until_last_slot" => Ok(SameDayPolicy::UntilLastSlot),
            other => Err(format!("unknown same-day policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub same_day_policy: SameDayPolicy,
    pub booking_horizon_days: u32,
    pub max_patient_notes_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            same_day_policy: SameDayPolicy::default(),
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            max_patient_notes_length: DEFAULT_MAX_PATIENT_NOTES_LENGTH,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using {}", defaults.server_host);
                    defaults.server_host.clone()
                }),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            same_day_policy: parse_var("SAME_DAY_POLICY", defaults.same_day_policy),
            booking_horizon_days: parse_var("BOOKING_HORIZON_DAYS", defaults.booking_horizon_days),
            max_patient_notes_length: parse_var(
                "MAX_PATIENT_NOTES_LENGTH",
                defaults.max_patient_notes_length,
            ),
        };

        if !config.is_valid() {
            warn!("Booking horizon is zero - no dates will ever be listed as bookable");
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.booking_horizon_days > 0
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}
