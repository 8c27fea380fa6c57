//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical timestamp used in sun-times and element
//! span results. Conversions go through the Julian Day (UT); `chrono` is used
//! for parsing and interop.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, calendar_to_jd, jd_to_calendar};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC at the start of the given civil date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Convert to Julian Day (UT).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / MINUTES_PER_DAY
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Day (UT) of 0h on this timestamp's date.
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Convert from Julian Day (UT), rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut day_number = shifted.floor();
        let mut millis = ((shifted - day_number) * MILLIS_PER_DAY).round();
        if millis >= MILLIS_PER_DAY {
            millis -= MILLIS_PER_DAY;
            day_number += 1.0;
        }
        let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);
        let ms = millis as u64;
        let hour = (ms / 3_600_000) as u32;
        let minute = ((ms / 60_000) % 60) as u32;
        // from whole milliseconds, so the field carries no float residue
        let second = (ms % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour,
            minute,
            second,
        }
    }

    /// Shift by a (possibly negative or fractional) number of minutes.
    pub fn add_minutes(&self, minutes: f64) -> Self {
        Self::from_jd(self.to_jd() + minutes / MINUTES_PER_DAY)
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `self` is earlier).
    pub fn minutes_since(&self, earlier: &UtcTime) -> f64 {
        (self.to_jd() - earlier.to_jd()) * MINUTES_PER_DAY
    }

    /// Convert to a `chrono` UTC timestamp.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round() as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .map(|naive| naive.and_utc())
            .ok_or(TimeError::InvalidDate("UtcTime fields out of range"))
    }

    /// Check that the calendar fields name a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        self.to_datetime().map(|_| ())
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2024-03-20T06:15:00Z`, `2024-03-20T11:45:00+05:30`),
    /// a naive `YYYY-MM-DDThh:mm:ss` taken as UTC, or a bare `YYYY-MM-DD`
    /// (midnight UTC).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc).into());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc().into());
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        Ok(Self::midnight(date.year(), date.month(), date.day()))
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
