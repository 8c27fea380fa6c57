//! Civil time ↔ Julian Day conversions.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day (noon epoch) conversions
//! - Civil local time + UTC offset → Julian Day
//! - `UtcTime`, the timestamp type used across the panchang crates
//! - Weekday lookup from a Julian Day

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, civil_to_jd, jd_to_calendar,
    weekday_from_jd,
};
pub use utc_time::UtcTime;

/// Julian Day (UT) of a UTC civil timestamp.
///
/// Convenience alias for [`UtcTime::to_jd`].
pub fn to_julian_day(utc: &UtcTime) -> f64 {
    utc.to_jd()
}
