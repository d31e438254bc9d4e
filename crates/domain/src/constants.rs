//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use chrono::NaiveDate;

// Board slot axis
pub const SLOT_MINUTES: u32 = 15;
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;
/// 06:00 through 17:45 inclusive.
pub const SLOT_COUNT: usize = ((DAY_END_HOUR - DAY_START_HOUR) * 60 / SLOT_MINUTES) as usize;

// Board geometry (pixels)
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 21;
pub const DEFAULT_HEADER_HEIGHT_PX: u32 = 45;

// Appointment drafts
pub const DEFAULT_SERVICE_DURATION_MINUTES: u32 = 30;

// Display fallbacks
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";
pub const UNKNOWN_SERVICE: &str = "Unknown Service";

// HTTP
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: u32 = 1;

/// First day covered by an open-all / close-all override.
pub fn open_all_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Last day covered by an open-all / close-all override.
pub fn open_all_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX)
}
