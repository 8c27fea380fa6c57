//! Types for sunrise/sunset calculations.
//!
//! Provides the observer location, solver configuration, and the raw
//! (minutes) and civil (`UtcTime`) result types.

use panchang_time::{MINUTES_PER_DAY, UtcTime};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
///
/// Unlike ecliptic longitudes, geographic coordinates are validated and
/// rejected when out of range, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a location without validation.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Create a location, rejecting out-of-range coordinates.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, VedicError> {
        let loc = Self::new(latitude_deg, longitude_deg, altitude_m);
        loc.validate()?;
        Ok(loc)
    }

    /// Check latitude in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLatitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLongitude(self.longitude_deg));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Sun's center on the geometric horizon: no refraction, no limb.
    pub fn geometric() -> Self {
        Self {
            refraction_arcmin: 0.0,
            semidiameter_arcmin: 0.0,
            altitude_correction: false,
        }
    }

    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad.to_degrees()
        } else {
            base
        }
    }

    /// Zenith distance of the Sun's center at rise/set, in degrees.
    ///
    /// 90.833 deg for the default config at sea level.
    pub fn zenith_deg(&self, altitude_m: f64) -> f64 {
        90.0 + self.horizon_depression_deg(altitude_m)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=120.0).contains(&self.refraction_arcmin) {
            return Err("refraction_arcmin must be in [0, 120]");
        }
        if !(0.0..=60.0).contains(&self.semidiameter_arcmin) {
            return Err("semidiameter_arcmin must be in [0, 60]");
        }
        Ok(())
    }
}

/// Raw rise/set solution in UTC minutes relative to 0h UT of the date.
///
/// Minutes are unwrapped: near the date line sunrise can be negative (the
/// previous UTC day) and sunset can exceed 1440 (the next UTC day), but
/// `sunset_min > sunrise_min` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiseSetMinutes {
    Event { sunrise_min: f64, sunset_min: f64 },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl RiseSetMinutes {
    /// Rise and set as minutes-of-day in [0, 1440), or `None` when polar.
    ///
    /// After wrapping, sunset may be numerically smaller than sunrise when
    /// the daylight interval crosses 0h UT.
    pub fn wrapped(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Event {
                sunrise_min,
                sunset_min,
            } => Some((
                sunrise_min.rem_euclid(MINUTES_PER_DAY),
                sunset_min.rem_euclid(MINUTES_PER_DAY),
            )),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    /// Daylight duration in minutes (0 for polar night, 1440 for polar day).
    pub fn day_length_minutes(&self) -> f64 {
        match *self {
            Self::Event {
                sunrise_min,
                sunset_min,
            } => sunset_min - sunrise_min,
            Self::NeverRises => 0.0,
            Self::NeverSets => MINUTES_PER_DAY,
        }
    }
}

/// Civil sunrise/sunset for a location and date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SunTimes {
    Regular {
        sunrise: UtcTime,
        sunset: UtcTime,
        day_length_minutes: f64,
    },
    /// Continuous daylight for the whole date.
    PolarDay,
    /// Continuous night for the whole date.
    PolarNight,
}

impl SunTimes {
    pub fn sunrise(&self) -> Option<UtcTime> {
        match self {
            Self::Regular { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub fn sunset(&self) -> Option<UtcTime> {
        match self {
            Self::Regular { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    pub fn is_polar(&self) -> bool {
        matches!(self, Self::PolarDay | Self::PolarNight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.semidiameter_arcmin, 16.0);
        assert!(c.altitude_correction);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn standard_zenith_at_sea_level() {
        let z = RiseSetConfig::default().zenith_deg(0.0);
        assert!((z - 90.8333).abs() < 1e-3, "zenith = {z}");
    }

    #[test]
    fn depression_1000m() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        let base = (34.0 + 16.0) / 60.0;
        // sqrt(2*1000/6371000) rad is about 1.015 deg
        assert!(d > base + 0.9, "{d}");
        assert!(d < base + 1.2, "{d}");
    }

    #[test]
    fn depression_no_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        let expected = (34.0 + 16.0) / 60.0;
        assert!((c.horizon_depression_deg(10_000.0) - expected).abs() < 1e-10);
    }

    #[test]
    fn geometric_zenith_is_90() {
        assert_eq!(RiseSetConfig::geometric().zenith_deg(500.0), 90.0);
    }

    #[test]
    fn config_validate_rejects_negative() {
        let c = RiseSetConfig {
            refraction_arcmin: -1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn geolocation_radians() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn geolocation_bounds_inclusive() {
        assert!(GeoLocation::try_new(90.0, 180.0, 0.0).is_ok());
        assert!(GeoLocation::try_new(-90.0, -180.0, 0.0).is_ok());
    }

    #[test]
    fn geolocation_rejects_out_of_range() {
        assert_eq!(
            GeoLocation::try_new(90.5, 0.0, 0.0),
            Err(VedicError::InvalidLatitude(90.5))
        );
        assert_eq!(
            GeoLocation::try_new(0.0, -180.5, 0.0),
            Err(VedicError::InvalidLongitude(-180.5))
        );
        assert!(GeoLocation::try_new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn wrapped_folds_into_day() {
        let m = RiseSetMinutes::Event {
            sunrise_min: -300.0,
            sunset_min: 420.0,
        };
        assert_eq!(m.wrapped(), Some((1140.0, 420.0)));
        assert_eq!(m.day_length_minutes(), 720.0);
        assert_eq!(RiseSetMinutes::NeverSets.wrapped(), None);
    }

    #[test]
    fn polar_accessors() {
        assert!(SunTimes::PolarDay.is_polar());
        assert!(SunTimes::PolarNight.sunrise().is_none());
    }
}
