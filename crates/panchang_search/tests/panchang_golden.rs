//! Daily panchang assembly with a mean-motion ephemeris.
//!
//! The provider is anchored at the new moon of 2024-04-08 18:21 UT with
//! Sun and Moon at sidereal 355.2 deg (Lahiri), which pins every element
//! boundary analytically.

use panchang_base::{
    GeoLocation, Graha, Karana, Nakshatra, Paksha, Rashi, SunTimes, Tithi, Vara, VedicError, Yoga,
};
use panchang_search::{
    MeanMotionEphemeris, PanchangConfig, SearchError, panchang_for_date, tithi_span,
};
use panchang_time::UtcTime;

const NEW_MOON_LON: f64 = 355.2;

fn new_moon_jd() -> f64 {
    UtcTime::new(2024, 4, 8, 18, 21, 0.0).to_jd()
}

fn provider() -> MeanMotionEphemeris {
    MeanMotionEphemeris::new(new_moon_jd(), NEW_MOON_LON, NEW_MOON_LON)
}

fn new_delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.209, 0.0)
}

#[test]
fn day_after_new_moon_in_new_delhi() {
    let date = UtcTime::midnight(2024, 4, 9);
    let info = panchang_for_date(&provider(), &new_delhi(), &date, &PanchangConfig::default())
        .unwrap();

    // evaluated at sunrise, ~00:29 UT
    assert_eq!(Some(info.evaluated_at), info.sun_times.sunrise());
    assert_eq!(info.evaluated_at.hour, 0);

    assert_eq!(info.vara.vara, Vara::Mangalavara);
    assert_eq!(info.hora_lord, Graha::Mangal);

    assert_eq!(info.tithi.info.tithi, Tithi::ShuklaPratipada);
    assert_eq!(info.tithi.info.paksha, Paksha::Shukla);
    assert_eq!(info.karana.info.karana, Karana::Kimstughna);
    assert_eq!(info.nakshatra.info.nakshatra, Nakshatra::Revati);
    assert_eq!(info.yoga.info.yoga, Yoga::Vaidhriti);
    assert_eq!(info.sun_rashi.rashi, Rashi::Meena);
    assert_eq!(info.moon_rashi.rashi, Rashi::Meena);

    assert!(info.all_precise());
    assert!(info.tithi.contains(&info.evaluated_at));
    assert!(info.karana.contains(&info.evaluated_at));
    assert!(info.nakshatra.contains(&info.evaluated_at));
    assert!(info.yoga.contains(&info.evaluated_at));
}

#[test]
fn tithi_starts_at_new_moon() {
    let jd = new_moon_jd() + 0.3;
    let span = tithi_span(&provider(), jd, &PanchangConfig::default().tithi).unwrap();
    assert_eq!(span.info.number, 1);
    assert!((span.start.to_jd() - new_moon_jd()).abs() * 1440.0 < 1.0);
    // 12 deg at the mean synodic rate is ~23.6 h
    let hours = span.duration_minutes() / 60.0;
    assert!((hours - 23.62).abs() < 0.1, "tithi lasted {hours} h");
}

#[test]
fn revati_ends_when_moon_reaches_zero() {
    let date = UtcTime::midnight(2024, 4, 9);
    let info = panchang_for_date(&provider(), &new_delhi(), &date, &PanchangConfig::default())
        .unwrap();
    let dt = (360.0 - NEW_MOON_LON) / panchang_search::MEAN_MOON_SPEED_DEG_PER_DAY;
    let expected = new_moon_jd() + dt;
    assert!((info.nakshatra.end.to_jd() - expected).abs() * 1440.0 < 1.0);
}

#[test]
fn karana_spans_nest_inside_tithi() {
    let date = UtcTime::midnight(2024, 4, 9);
    let info = panchang_for_date(&provider(), &new_delhi(), &date, &PanchangConfig::default())
        .unwrap();
    assert!((info.karana.start.to_jd() - info.tithi.start.to_jd()).abs() * 1440.0 < 1.0);
    assert!(info.karana.end.to_jd() < info.tithi.end.to_jd());
    let ratio = info.karana.duration_minutes() / info.tithi.duration_minutes();
    assert!((ratio - 0.5).abs() < 0.01);
}

#[test]
fn tuesday_periods_follow_sunrise() {
    let date = UtcTime::midnight(2024, 4, 9);
    let info = panchang_for_date(&provider(), &new_delhi(), &date, &PanchangConfig::default())
        .unwrap();
    let (sunrise, sunset) = match info.sun_times {
        SunTimes::Regular { sunrise, sunset, .. } => (sunrise, sunset),
        other => panic!("expected regular sun times, got {other:?}"),
    };
    let eighth = sunset.minutes_since(&sunrise) / 8.0;

    // Tuesday Rahu Kalam is the 7th eighth of daylight
    let periods = info.periods.unwrap();
    let offset = periods.rahu_kalam.start.minutes_since(&sunrise);
    assert!((offset - 6.0 * eighth).abs() < 1e-3, "rahu offset {offset}");
    assert!(periods.abhijit_muhurta.auspicious);

    let muhurtas = info.muhurtas.unwrap();
    assert!(muhurtas[0].start.minutes_since(&sunrise).abs() < 1e-3);
    assert_eq!((muhurtas[29].end.month, muhurtas[29].end.day), (4, 10));
}

#[test]
fn polar_day_falls_back_to_local_noon() {
    let tromso = GeoLocation::new(69.6496, 18.956, 0.0);
    let date = UtcTime::midnight(2024, 6, 21);
    let eph = MeanMotionEphemeris::new(date.to_jd(), 66.0, 120.0);
    let info = panchang_for_date(&eph, &tromso, &date, &PanchangConfig::default()).unwrap();
    assert_eq!(info.sun_times, SunTimes::PolarDay);
    // 12:00 local mean time at 18.956 E is ~10:44 UT
    assert_eq!(info.evaluated_at.hour, 10);
    assert!(info.all_precise());
    assert!(info.periods.is_none());
    assert!(info.muhurtas.is_none());
}

#[test]
fn invalid_location_is_rejected() {
    let r = panchang_for_date(
        &provider(),
        &GeoLocation::new(95.0, 0.0, 0.0),
        &UtcTime::midnight(2024, 4, 9),
        &PanchangConfig::default(),
    );
    assert_eq!(r, Err(SearchError::Vedic(VedicError::InvalidLatitude(95.0))));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = PanchangConfig::default();
    config.nakshatra.window_hours = 0.0;
    let r = panchang_for_date(
        &provider(),
        &new_delhi(),
        &UtcTime::midnight(2024, 4, 9),
        &config,
    );
    assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
}

#[test]
fn serializes_to_json() {
    let info = panchang_for_date(
        &provider(),
        &new_delhi(),
        &UtcTime::midnight(2024, 4, 9),
        &PanchangConfig::default(),
    )
    .unwrap();
    let v = serde_json::to_value(&info).unwrap();
    assert_eq!(v["tithi"]["info"]["name"], "Pratipada");
    assert_eq!(v["vara"]["english_name"], "Tuesday");
    assert_eq!(v["tithi"]["precise"], true);
    assert_eq!(v["periods"]["rahu_kalam"]["period"], "RahuKalam");
    assert_eq!(v["muhurtas"][7]["name"], "Abhijit");
}

#[test]
fn same_inputs_same_panchang() {
    let date = UtcTime::midnight(2024, 4, 9);
    let config = PanchangConfig::default();
    let a = panchang_for_date(&provider(), &new_delhi(), &date, &config).unwrap();
    let b = panchang_for_date(&provider(), &new_delhi(), &date, &config).unwrap();
    assert_eq!(a, b);
}
