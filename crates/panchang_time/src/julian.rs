//! Julian Day ↔ proleptic Gregorian calendar conversions.
//!
//! Julian Days use the astronomical noon epoch: JD x.0 is noon UT and
//! JD x.5 is midnight UT. Algorithms follow Meeus, *Astronomical
//! Algorithms*, ch. 7, applied to the proleptic Gregorian calendar.

use chrono::NaiveDate;

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Convert a Gregorian calendar date to Julian Day.
///
/// `day_frac` carries the time of day: `1.5` is the 1st at 12:00 UT.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Day back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Civil local date/time plus UTC offset to Julian Day (UT).
///
/// `utc_offset_hours` is east-positive (IST = +5.5). The calendar fields are
/// validated; leap second 60 is accepted.
pub fn civil_to_jd(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_hours: f64,
) -> Result<f64, TimeError> {
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(TimeError::InvalidDate("no such calendar day"));
    }
    if hour > 23 {
        return Err(TimeError::InvalidDate("hour must be 0-23"));
    }
    if minute > 59 {
        return Err(TimeError::InvalidDate("minute must be 0-59"));
    }
    if !(0.0..61.0).contains(&second) {
        return Err(TimeError::InvalidDate("second must be in [0, 61)"));
    }
    if !(-14.0..=14.0).contains(&utc_offset_hours) {
        return Err(TimeError::InvalidDate("UTC offset must be within +/-14 h"));
    }
    let day_frac = day as f64
        + hour as f64 / 24.0
        + minute as f64 / MINUTES_PER_DAY
        + second / SECONDS_PER_DAY
        - utc_offset_hours / 24.0;
    Ok(calendar_to_jd(year, month, day_frac))
}

/// Weekday of the civil (UT) day containing `jd`. 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}
