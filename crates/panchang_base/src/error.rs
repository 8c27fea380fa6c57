//! Error types for location validation and sun-time calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;

/// Errors from panchang base calculations.
///
/// Polar day and polar night are not errors; they are reported as
/// [`SunTimes`](crate::SunTimes) variants.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Latitude outside [-90, 90] degrees, or not finite.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees, or not finite.
    InvalidLongitude(f64),
    /// Invalid calendar date or time.
    Time(TimeError),
    /// Rise/set configuration rejected by `validate()`.
    InvalidConfig(&'static str),
    /// A day interval whose end is not after its start, or not finite.
    InvalidInterval { start_jd: f64, end_jd: f64 },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(v) => write!(f, "invalid latitude: {v} (expected -90..=90)"),
            Self::InvalidLongitude(v) => {
                write!(f, "invalid longitude: {v} (expected -180..=180)")
            }
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidInterval { start_jd, end_jd } => {
                write!(f, "invalid interval: end JD {end_jd} is not after start JD {start_jd}")
            }
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
