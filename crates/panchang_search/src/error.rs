//! Error types for boundary search and panchang assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_base::VedicError;
use panchang_time::TimeError;

/// Errors from search, ephemeris lookups and regional hooks.
///
/// A boundary search that finds no crossing is not an error; it is reported
/// through [`BoundarySearch::converged`](crate::BoundarySearch::converged).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Location, date or sun-times failure from the base layer.
    Vedic(VedicError),
    /// The ephemeris provider could not supply longitudes.
    Ephemeris(String),
    /// Invalid search configuration.
    InvalidConfig(&'static str),
    /// A regional rule hook failed.
    Hook { hook: String, message: String },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vedic(e) => write!(f, "{e}"),
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Hook { hook, message } => write!(f, "hook '{hook}' failed: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vedic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Vedic(VedicError::Time(e))
    }
}
