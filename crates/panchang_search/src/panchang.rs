//! Element spans and daily panchang assembly.
//!
//! Each span classifies the element at an instant, then searches backward
//! for its start and forward for its end. Positions come from an
//! [`EphemerisProvider`]; this module never computes planetary positions.

use log::debug;
use panchang_base::{
    GeoLocation, KARANA_SEGMENT_DEG, KaranaInfo, NAKSHATRA_SPAN_27, NakshatraInfo,
    TITHI_SEGMENT_DEG, TithiInfo, YOGA_SEGMENT_DEG, YogaInfo, approximate_local_noon_jd,
    calculate_karana, calculate_muhurtas, calculate_nakshatra, calculate_rashi,
    calculate_sun_times, calculate_tithi, calculate_traditional_periods, calculate_vara,
    calculate_yoga, hora_lord,
};
use panchang_time::UtcTime;

use crate::boundary::{find_boundary_time, segment_contains};
use crate::boundary_types::{BoundarySearchConfig, SearchDirection};
use crate::ephemeris::{EphemerisProvider, Longitudes};
use crate::error::SearchError;
use crate::panchang_types::{ElementSpan, PanchangConfig, PanchangInfo};

/// Search both boundaries of segment `number` around `jd`.
fn span_around<P, T>(
    provider: &P,
    jd: f64,
    number: u8,
    span_deg: f64,
    position: fn(&Longitudes) -> f64,
    info: T,
    config: &BoundarySearchConfig,
) -> Result<ElementSpan<T>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let pos_fn = |t: f64| -> Result<f64, SearchError> { Ok(position(&provider.longitudes(t)?)) };
    let check = |pos: f64, n: u8| segment_contains(pos, n, span_deg);

    let start = find_boundary_time(jd, number, &check, &pos_fn, SearchDirection::Backward, config)?;
    let end = find_boundary_time(jd, number, &check, &pos_fn, SearchDirection::Forward, config)?;

    Ok(ElementSpan {
        info,
        start: UtcTime::from_jd(start.jd),
        end: UtcTime::from_jd(end.jd),
        precise: start.converged && end.converged,
    })
}

fn elongation_of(l: &Longitudes) -> f64 {
    l.elongation()
}

fn sum_of(l: &Longitudes) -> f64 {
    l.sum()
}

fn moon_of(l: &Longitudes) -> f64 {
    l.moon_deg
}

/// Tithi at `jd` (UT) with its start and end.
pub fn tithi_span<P>(
    provider: &P,
    jd: f64,
    config: &BoundarySearchConfig,
) -> Result<ElementSpan<TithiInfo>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let l = provider.longitudes(jd)?;
    let info = calculate_tithi(l.sun_deg, l.moon_deg);
    span_around(
        provider,
        jd,
        info.number,
        TITHI_SEGMENT_DEG,
        elongation_of,
        info,
        config,
    )
}

/// Karana at `jd` (UT) with its start and end.
pub fn karana_span<P>(
    provider: &P,
    jd: f64,
    config: &BoundarySearchConfig,
) -> Result<ElementSpan<KaranaInfo>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let l = provider.longitudes(jd)?;
    let info = calculate_karana(l.sun_deg, l.moon_deg);
    span_around(
        provider,
        jd,
        info.number,
        KARANA_SEGMENT_DEG,
        elongation_of,
        info,
        config,
    )
}

/// Yoga at `jd` (UT) with its start and end.
pub fn yoga_span<P>(
    provider: &P,
    jd: f64,
    config: &BoundarySearchConfig,
) -> Result<ElementSpan<YogaInfo>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let l = provider.longitudes(jd)?;
    let info = calculate_yoga(l.sun_deg, l.moon_deg);
    span_around(
        provider,
        jd,
        info.number,
        YOGA_SEGMENT_DEG,
        sum_of,
        info,
        config,
    )
}

/// Moon's nakshatra at `jd` (UT) with its start and end.
pub fn nakshatra_span<P>(
    provider: &P,
    jd: f64,
    config: &BoundarySearchConfig,
) -> Result<ElementSpan<NakshatraInfo>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let l = provider.longitudes(jd)?;
    let info = calculate_nakshatra(l.moon_deg);
    span_around(
        provider,
        jd,
        info.number,
        NAKSHATRA_SPAN_27,
        moon_of,
        info,
        config,
    )
}

/// Panchang for the civil date of `date` at `location`.
///
/// Elements are evaluated at sunrise. When the Sun does not rise or set
/// that day, local mean noon is used instead and the sunrise-based periods
/// are left empty.
pub fn panchang_for_date<P>(
    provider: &P,
    location: &GeoLocation,
    date: &UtcTime,
    config: &PanchangConfig,
) -> Result<PanchangInfo, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let day = UtcTime::midnight(date.year, date.month, date.day);
    let sun_times = calculate_sun_times(location, &day, &config.riseset)?;

    let evaluated_at = match sun_times.sunrise() {
        Some(sunrise) => sunrise,
        None => {
            let noon = approximate_local_noon_jd(day.jd_midnight(), location.longitude_deg);
            debug!("no sunrise on {day} ({sun_times:?}); evaluating at local noon");
            UtcTime::from_jd(noon)
        }
    };
    let jd = evaluated_at.to_jd();
    let longitudes = provider.longitudes(jd)?;

    let vara = calculate_vara(jd, location.longitude_deg);
    let tithi = tithi_span(provider, jd, &config.tithi)?;
    let nakshatra = nakshatra_span(provider, jd, &config.nakshatra)?;
    let yoga = yoga_span(provider, jd, &config.yoga)?;
    let karana = karana_span(provider, jd, &config.karana)?;

    let (periods, muhurtas) = match (sun_times.sunrise(), sun_times.sunset()) {
        (Some(sunrise), Some(sunset)) => {
            let periods = calculate_traditional_periods(&sunrise, &sunset, vara.vara)?;
            let next_day = UtcTime::from_jd(day.jd_midnight() + 1.0);
            let muhurtas = match calculate_sun_times(location, &next_day, &config.riseset)?.sunrise()
            {
                Some(next_sunrise) => Some(calculate_muhurtas(&sunrise, &sunset, &next_sunrise)?),
                None => None,
            };
            (Some(periods), muhurtas)
        }
        _ => (None, None),
    };

    Ok(PanchangInfo {
        date: day,
        location: *location,
        sun_times,
        evaluated_at,
        longitudes,
        hora_lord: hora_lord(vara.vara, 0),
        vara,
        tithi,
        nakshatra,
        yoga,
        karana,
        sun_rashi: calculate_rashi(longitudes.sun_deg),
        moon_rashi: calculate_rashi(longitudes.moon_deg),
        periods,
        muhurtas,
    })
}
