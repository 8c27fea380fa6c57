//! Low-precision apparent position of the Sun.
//!
//! Uses the short series from the Astronomical Almanac (also used by the
//! NOAA solar calculator): mean longitude, mean anomaly, equation of center
//! to two terms and a linear obliquity. Accuracy is about 0.01 deg in
//! longitude and a few seconds of time in the equation of time between
//! 1950 and 2050, which is well inside the one-minute granularity of
//! sunrise/sunset output.

use panchang_math::{normalize_360, normalize_to_pm180};
use panchang_time::J2000_JD;
use serde::{Deserialize, Serialize};

/// Solar quantities needed by the rise/set solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Apparent minus mean solar time, in minutes. Within about +/-17 min.
    pub equation_of_time_min: f64,
    /// Declination in radians.
    pub declination_rad: f64,
    /// Apparent (tropical) ecliptic longitude in degrees [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Right ascension in degrees [0, 360).
    pub right_ascension_deg: f64,
}

impl SolarPosition {
    /// Declination in degrees.
    pub fn declination_deg(&self) -> f64 {
        self.declination_rad.to_degrees()
    }
}

/// Solar position at Julian Day (UT) `jd`.
pub fn solar_position(jd: f64) -> SolarPosition {
    let n = jd - J2000_JD;

    let mean_lon = normalize_360(280.460 + 0.985_647_4 * n);
    let mean_anom = normalize_360(357.528 + 0.985_600_3 * n).to_radians();

    let lambda = normalize_360(
        mean_lon + 1.915 * mean_anom.sin() + 0.020 * (2.0 * mean_anom).sin(),
    );
    let lambda_rad = lambda.to_radians();
    let eps = (23.439 - 4.0e-7 * n).to_radians();

    let alpha = normalize_360(
        (eps.cos() * lambda_rad.sin())
            .atan2(lambda_rad.cos())
            .to_degrees(),
    );
    let delta = (eps.sin() * lambda_rad.sin()).asin();

    // 1 deg of hour angle = 4 minutes of time
    let eot = 4.0 * normalize_to_pm180(mean_lon - alpha);

    SolarPosition {
        equation_of_time_min: eot,
        declination_rad: delta,
        ecliptic_longitude_deg: lambda,
        right_ascension_deg: alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_time::calendar_to_jd;

    #[test]
    fn march_equinox_declination_near_zero() {
        // 2024-03-20 03:06 UT
        let pos = solar_position(calendar_to_jd(2024, 3, 20.13));
        assert!(pos.declination_deg().abs() < 0.1, "dec = {}", pos.declination_deg());
        assert!(
            pos.ecliptic_longitude_deg < 0.2 || pos.ecliptic_longitude_deg > 359.8,
            "lambda = {}",
            pos.ecliptic_longitude_deg
        );
    }

    #[test]
    fn june_solstice_declination_max() {
        let pos = solar_position(calendar_to_jd(2024, 6, 20.9));
        assert!((pos.declination_deg() - 23.44).abs() < 0.05);
    }

    #[test]
    fn equation_of_time_early_november_peak() {
        // EoT peaks around +16.4 min in early November.
        let pos = solar_position(calendar_to_jd(2024, 11, 3.5));
        assert!(
            (pos.equation_of_time_min - 16.4).abs() < 0.5,
            "eot = {}",
            pos.equation_of_time_min
        );
    }

    #[test]
    fn equation_of_time_mid_february_trough() {
        // EoT bottoms near -14.2 min around February 11.
        let pos = solar_position(calendar_to_jd(2024, 2, 11.5));
        assert!(
            (pos.equation_of_time_min + 14.2).abs() < 0.5,
            "eot = {}",
            pos.equation_of_time_min
        );
    }

    #[test]
    fn bounded_over_a_year() {
        let jd0 = calendar_to_jd(2024, 1, 1.5);
        for day in 0..366 {
            let pos = solar_position(jd0 + day as f64);
            assert!(pos.equation_of_time_min.abs() <= 20.0, "day {day}");
            assert!(pos.declination_deg().abs() <= 23.44, "day {day}");
            assert!((0.0..360.0).contains(&pos.right_ascension_deg));
        }
    }

    #[test]
    fn deterministic() {
        let a = solar_position(2_460_477.0);
        let b = solar_position(2_460_477.0);
        assert_eq!(a, b);
    }
}
