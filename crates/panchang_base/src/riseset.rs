//! Sunrise/sunset from the hour-angle equation.
//!
//! The Sun's position is taken at approximate local noon, the hour angle at
//! the target zenith distance is solved, and each event is then refined by
//! re-evaluating the solar position at the estimated event time.
//!
//! Sources: standard spherical astronomy (Meeus ch. 15, NOAA solar
//! calculator).

use log::debug;
use panchang_time::{MINUTES_PER_DAY, UtcTime};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetMinutes, SunTimes};
use crate::solar::solar_position;

/// Maximum iterations for the per-event refinement loop.
const MAX_ITERATIONS: usize = 4;

/// Convergence threshold in minutes (~0.6 seconds).
const CONVERGENCE_MIN: f64 = 0.01;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// UTC minutes after 0h of the local transit of the Sun.
///
/// `720 - 4 * longitude - EoT`; may fall outside [0, 1440) near the date line.
pub fn solar_noon_minutes(longitude_deg: f64, equation_of_time_min: f64) -> f64 {
    720.0 - 4.0 * longitude_deg - equation_of_time_min
}

/// Solve the hour-angle equation for one solar position.
///
/// `cos H = (cos z - sin(lat) sin(dec)) / (cos(lat) cos(dec))`
///
/// `cos H > 1` means the Sun never reaches the horizon (polar night);
/// `cos H < -1` means it never drops below it (midnight sun). When the
/// cosine is not finite (the exact poles) the sign of the numerator decides.
pub fn calculate_rise_set(
    latitude_deg: f64,
    longitude_deg: f64,
    equation_of_time_min: f64,
    declination_rad: f64,
    zenith_deg: f64,
) -> RiseSetMinutes {
    let phi = latitude_deg.to_radians();
    let num = zenith_deg.to_radians().cos() - phi.sin() * declination_rad.sin();
    let den = phi.cos() * declination_rad.cos();
    let cos_h = num / den;

    if !cos_h.is_finite() {
        return if num > 0.0 {
            RiseSetMinutes::NeverRises
        } else {
            RiseSetMinutes::NeverSets
        };
    }
    if cos_h > 1.0 {
        return RiseSetMinutes::NeverRises;
    }
    if cos_h < -1.0 {
        return RiseSetMinutes::NeverSets;
    }

    let h_deg = cos_h.acos().to_degrees();
    let noon = solar_noon_minutes(longitude_deg, equation_of_time_min);
    RiseSetMinutes::Event {
        sunrise_min: noon - 4.0 * h_deg,
        sunset_min: noon + 4.0 * h_deg,
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Rise,
    Set,
}

/// Re-solve one event with the Sun's position at the event itself.
///
/// Returns `None` if the refined solution turns polar; the caller keeps the
/// noon estimate in that case.
fn refine_event(
    location: &GeoLocation,
    jd_0h: f64,
    mut minutes: f64,
    zenith_deg: f64,
    edge: Edge,
) -> Option<f64> {
    for _ in 0..MAX_ITERATIONS {
        let pos = solar_position(jd_0h + minutes / MINUTES_PER_DAY);
        let next = match calculate_rise_set(
            location.latitude_deg,
            location.longitude_deg,
            pos.equation_of_time_min,
            pos.declination_rad,
            zenith_deg,
        ) {
            RiseSetMinutes::Event {
                sunrise_min,
                sunset_min,
            } => match edge {
                Edge::Rise => sunrise_min,
                Edge::Set => sunset_min,
            },
            RiseSetMinutes::NeverRises | RiseSetMinutes::NeverSets => return None,
        };
        let delta = next - minutes;
        minutes = next;
        if delta.abs() < CONVERGENCE_MIN {
            break;
        }
    }
    Some(minutes)
}

/// Civil sunrise and sunset for `location` on the UTC calendar date of `date`.
///
/// Only the date fields of `date` are used. Results are UTC instants; for
/// locations far from Greenwich the local-day sunrise can fall on the
/// previous UTC date (east) or sunset on the next one (west).
pub fn calculate_sun_times(
    location: &GeoLocation,
    date: &UtcTime,
    config: &RiseSetConfig,
) -> Result<SunTimes, VedicError> {
    location.validate()?;
    config.validate().map_err(VedicError::InvalidConfig)?;
    date.validate()?;

    let jd_0h = date.jd_midnight();
    let jd_noon = approximate_local_noon_jd(jd_0h, location.longitude_deg);
    let zenith = config.zenith_deg(location.altitude_m);
    let pos = solar_position(jd_noon);

    let estimate = calculate_rise_set(
        location.latitude_deg,
        location.longitude_deg,
        pos.equation_of_time_min,
        pos.declination_rad,
        zenith,
    );
    let (rise_est, set_est) = match estimate {
        RiseSetMinutes::Event {
            sunrise_min,
            sunset_min,
        } => (sunrise_min, sunset_min),
        RiseSetMinutes::NeverRises => {
            debug!(
                "polar night at lat {} on {}-{:02}-{:02}",
                location.latitude_deg, date.year, date.month, date.day
            );
            return Ok(SunTimes::PolarNight);
        }
        RiseSetMinutes::NeverSets => {
            debug!(
                "polar day at lat {} on {}-{:02}-{:02}",
                location.latitude_deg, date.year, date.month, date.day
            );
            return Ok(SunTimes::PolarDay);
        }
    };

    let rise = refine_event(location, jd_0h, rise_est, zenith, Edge::Rise).unwrap_or(rise_est);
    let set = refine_event(location, jd_0h, set_est, zenith, Edge::Set).unwrap_or(set_est);
    let (rise, set) = if set > rise {
        (rise, set)
    } else {
        (rise_est, set_est)
    };

    Ok(SunTimes::Regular {
        sunrise: UtcTime::from_jd(jd_0h + rise / MINUTES_PER_DAY),
        sunset: UtcTime::from_jd(jd_0h + set / MINUTES_PER_DAY),
        day_length_minutes: set - rise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z: f64 = 90.833;

    #[test]
    fn local_noon_greenwich() {
        assert!((approximate_local_noon_jd(2_451_544.5, 0.0) - 2_451_545.0).abs() < 1e-12);
    }

    #[test]
    fn local_noon_east_is_earlier() {
        // 90 E transits 6 h before Greenwich
        let jd = approximate_local_noon_jd(2_451_544.5, 90.0);
        assert!((jd - 2_451_544.75).abs() < 1e-12);
    }

    #[test]
    fn solar_noon_minutes_basic() {
        assert_eq!(solar_noon_minutes(0.0, 0.0), 720.0);
        assert_eq!(solar_noon_minutes(-90.0, 0.0), 1080.0);
        assert_eq!(solar_noon_minutes(0.0, 10.0), 710.0);
    }

    #[test]
    fn equator_equinox_symmetric() {
        match calculate_rise_set(0.0, 0.0, 0.0, 0.0, Z) {
            RiseSetMinutes::Event {
                sunrise_min,
                sunset_min,
            } => {
                assert!((sunrise_min + sunset_min - 1440.0).abs() < 1e-9);
                let len = sunset_min - sunrise_min;
                // 8 * (90 + 0.833) = 726.7
                assert!((len - 726.66).abs() < 0.1, "len = {len}");
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn polar_night_classified() {
        let dec = (-23.44_f64).to_radians();
        assert_eq!(
            calculate_rise_set(71.0, 25.0, 0.0, dec, Z),
            RiseSetMinutes::NeverRises
        );
    }

    #[test]
    fn polar_day_classified() {
        let dec = 23.44_f64.to_radians();
        assert_eq!(
            calculate_rise_set(71.0, 25.0, 0.0, dec, Z),
            RiseSetMinutes::NeverSets
        );
    }

    #[test]
    fn exact_poles_never_nan() {
        for lat in [90.0, -90.0] {
            for dec in [-0.4, -0.01, 0.0, 0.01, 0.4] {
                let r = calculate_rise_set(lat, 0.0, 0.0, dec, Z);
                if let RiseSetMinutes::Event {
                    sunrise_min,
                    sunset_min,
                } = r
                {
                    assert!(sunrise_min.is_finite() && sunset_min.is_finite());
                }
            }
        }
    }

    #[test]
    fn date_line_east_sunrise_before_utc_midnight() {
        // At 180 E local noon is 0h UT, so sunrise is on the previous UTC day.
        match calculate_rise_set(0.0, 180.0, 0.0, 0.0, Z) {
            RiseSetMinutes::Event {
                sunrise_min,
                sunset_min,
            } => {
                assert!(sunrise_min < 0.0);
                assert!(sunset_min > sunrise_min);
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn sun_times_rejects_bad_location() {
        let date = UtcTime::midnight(2024, 3, 20);
        let r = calculate_sun_times(
            &GeoLocation::new(95.0, 0.0, 0.0),
            &date,
            &RiseSetConfig::default(),
        );
        assert_eq!(r, Err(VedicError::InvalidLatitude(95.0)));
    }

    #[test]
    fn sun_times_rejects_bad_date() {
        let date = UtcTime::midnight(2023, 2, 30);
        let r = calculate_sun_times(
            &GeoLocation::new(10.0, 0.0, 0.0),
            &date,
            &RiseSetConfig::default(),
        );
        assert!(matches!(r, Err(VedicError::Time(_))));
    }

    #[test]
    fn sun_times_regular_ordering() {
        let loc = GeoLocation::new(12.97, 77.59, 0.0);
        let r = calculate_sun_times(
            &loc,
            &UtcTime::midnight(2024, 1, 15),
            &RiseSetConfig::default(),
        )
        .unwrap();
        match r {
            SunTimes::Regular {
                sunrise,
                sunset,
                day_length_minutes,
            } => {
                assert!(sunset.to_jd() > sunrise.to_jd());
                assert!(day_length_minutes > 0.0);
                assert!((sunset.minutes_since(&sunrise) - day_length_minutes).abs() < 0.01);
            }
            other => panic!("expected regular, got {other:?}"),
        }
    }
}
