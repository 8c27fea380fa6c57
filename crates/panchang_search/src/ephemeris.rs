//! Sun/Moon longitude source used by element spans.
//!
//! The panchang core never computes planetary positions itself; anything
//! that can produce sidereal Sun and Moon longitudes for a Julian Day plugs
//! in through [`EphemerisProvider`].

use panchang_math::{angular_difference, normalize_360};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Mean sidereal motion of the Sun in degrees per day.
pub const MEAN_SUN_SPEED_DEG_PER_DAY: f64 = 0.985_609_1;

/// Mean sidereal motion of the Moon in degrees per day.
pub const MEAN_MOON_SPEED_DEG_PER_DAY: f64 = 13.176_358;

/// Sidereal Sun and Moon longitudes at one instant, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitudes {
    pub sun_deg: f64,
    pub moon_deg: f64,
}

impl Longitudes {
    /// Build from arbitrary degree values, normalizing both.
    pub fn new(sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            sun_deg: normalize_360(sun_deg),
            moon_deg: normalize_360(moon_deg),
        }
    }

    /// Moon minus Sun in [0, 360); drives tithi and karana.
    pub fn elongation(&self) -> f64 {
        angular_difference(self.moon_deg, self.sun_deg)
    }

    /// Sun plus Moon in [0, 360); drives yoga.
    pub fn sum(&self) -> f64 {
        normalize_360(self.sun_deg + self.moon_deg)
    }
}

/// Source of sidereal Sun/Moon longitudes.
pub trait EphemerisProvider {
    /// Longitudes at Julian Day `jd` (UT).
    fn longitudes(&self, jd: f64) -> Result<Longitudes, SearchError>;
}

impl<F> EphemerisProvider for F
where
    F: Fn(f64) -> Result<Longitudes, SearchError>,
{
    fn longitudes(&self, jd: f64) -> Result<Longitudes, SearchError> {
        self(jd)
    }
}

/// Linear mean-motion model: longitudes at an epoch plus constant daily
/// motion.
///
/// Good to a few degrees over a few days for the Moon, which is enough to
/// place element boundaries when the epoch longitudes come from a real
/// ephemeris near the date of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanMotionEphemeris {
    /// Epoch as a Julian Day (UT).
    pub epoch_jd: f64,
    /// Sun longitude at the epoch, degrees.
    pub sun_deg: f64,
    /// Moon longitude at the epoch, degrees.
    pub moon_deg: f64,
    /// Sun motion in degrees per day.
    pub sun_speed_deg_per_day: f64,
    /// Moon motion in degrees per day.
    pub moon_speed_deg_per_day: f64,
}

impl MeanMotionEphemeris {
    /// Epoch longitudes with mean daily motions.
    pub fn new(epoch_jd: f64, sun_deg: f64, moon_deg: f64) -> Self {
        Self::with_speeds(
            epoch_jd,
            sun_deg,
            moon_deg,
            MEAN_SUN_SPEED_DEG_PER_DAY,
            MEAN_MOON_SPEED_DEG_PER_DAY,
        )
    }

    /// Epoch longitudes with explicit daily motions.
    pub fn with_speeds(
        epoch_jd: f64,
        sun_deg: f64,
        moon_deg: f64,
        sun_speed_deg_per_day: f64,
        moon_speed_deg_per_day: f64,
    ) -> Self {
        Self {
            epoch_jd,
            sun_deg,
            moon_deg,
            sun_speed_deg_per_day,
            moon_speed_deg_per_day,
        }
    }

    /// Validate the model parameters.
    pub fn validate(&self) -> Result<(), &'static str> {
        let all_finite = [
            self.epoch_jd,
            self.sun_deg,
            self.moon_deg,
            self.sun_speed_deg_per_day,
            self.moon_speed_deg_per_day,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err("mean-motion parameters must be finite");
        }
        if self.moon_speed_deg_per_day <= self.sun_speed_deg_per_day {
            return Err("moon must move faster than the sun");
        }
        Ok(())
    }
}

impl EphemerisProvider for MeanMotionEphemeris {
    fn longitudes(&self, jd: f64) -> Result<Longitudes, SearchError> {
        if !jd.is_finite() {
            return Err(SearchError::Ephemeris(format!("non-finite jd {jd}")));
        }
        let dt = jd - self.epoch_jd;
        Ok(Longitudes::new(
            self.sun_deg + self.sun_speed_deg_per_day * dt,
            self.moon_deg + self.moon_speed_deg_per_day * dt,
        ))
    }
}
