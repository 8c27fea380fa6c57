//! Types for element boundary search.

use serde::{Deserialize, Serialize};

/// Which boundary of the current element to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchDirection {
    /// Search later in time for the element's end.
    Forward,
    /// Search earlier in time for the element's start.
    Backward,
}

/// Configuration for a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundarySearchConfig {
    /// How far from the starting instant to look, in hours.
    pub window_hours: f64,
    /// Stop once the bracket is narrower than this, in minutes (default 1).
    pub precision_minutes: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
}

impl BoundarySearchConfig {
    fn with_window(window_hours: f64) -> Self {
        Self {
            window_hours,
            precision_minutes: 1.0,
            max_iterations: 50,
        }
    }

    /// Tithi: a lunar day never lasts longer than ~26.5 h; 48 h window.
    pub fn tithi() -> Self {
        Self::with_window(48.0)
    }

    /// Yoga: 48 h window.
    pub fn yoga() -> Self {
        Self::with_window(48.0)
    }

    /// Karana: half a tithi; 24 h window.
    pub fn karana() -> Self {
        Self::with_window(24.0)
    }

    /// Nakshatra: Moon covers 13°20' in at most ~29 h; 36 h window.
    pub fn nakshatra() -> Self {
        Self::with_window(36.0)
    }

    /// Window length in days.
    pub fn window_days(&self) -> f64 {
        self.window_hours / 24.0
    }

    /// Precision in days.
    pub fn precision_days(&self) -> f64 {
        self.precision_minutes / 1440.0
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.window_hours.is_finite() || self.window_hours <= 0.0 {
            return Err("window_hours must be positive");
        }
        if !self.precision_minutes.is_finite() || self.precision_minutes <= 0.0 {
            return Err("precision_minutes must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

impl Default for BoundarySearchConfig {
    fn default() -> Self {
        Self::tithi()
    }
}

/// Outcome of a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundarySearch {
    /// Boundary instant as a Julian Day (UT).
    pub jd: f64,
    /// False when no crossing was found in the window or the iteration cap
    /// was hit first; `jd` is then only an estimate.
    pub converged: bool,
}
