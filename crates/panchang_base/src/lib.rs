//! Panchanga element calculators and sunrise/sunset.
//!
//! This crate provides:
//! - Low-precision solar position (equation of time, declination)
//! - Sunrise/sunset with polar day/night detection
//! - Tithi, Vara, Nakshatra, Yoga, Karana and Rashi from Sun/Moon longitudes
//! - Rahu Kalam, Yamagandam, Gulika Kalam, muhurtas and horas from sunrise
//!
//! Element calculators are pure, total functions of their inputs: any
//! finite longitude is accepted and normalized into [0, 360) first.
//! Sun/Moon longitudes are expected to be sidereal; producing them is the
//! caller's concern.

pub mod error;
pub mod graha;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod solar;
pub mod tithi;
pub mod vara;
pub mod yoga;

pub use error::VedicError;
pub use graha::{ALL_GRAHAS, CHALDEAN_ORDER, Graha, rashi_lord};
pub use karana::{
    KARANA_SEGMENT_DEG, Karana, KaranaInfo, KaranaType, MOVABLE_KARANAS, calculate_karana,
    karana_from_elongation,
};
pub use muhurta::{
    ABHIJIT_INDEX, DAY_MUHURTAS, DAY_PARTS, DayPeriod, HoraInfo, MUHURTA_COUNT, MUHURTA_NAMES,
    MuhurtaInfo, MuhurtaQuality, TimePeriod, TraditionalPeriods, calculate_muhurtas,
    calculate_traditional_periods, day_period, hora_at_time, hora_from_sunrises, portion_jd_range,
    vedic_day_sunrises,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN, calculate_nakshatra,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, RASHI_SPAN_DEG, Rashi, RashiInfo, RashiQuality, calculate_rashi,
    deg_to_dms, dms_to_deg,
};
pub use riseset::{
    approximate_local_noon_jd, calculate_rise_set, calculate_sun_times, solar_noon_minutes,
};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetMinutes, SunTimes};
pub use solar::{SolarPosition, solar_position};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiCategory, TithiInfo, calculate_tithi,
    tithi_from_elongation,
};
pub use vara::{ALL_VARAS, HORA_COUNT, Vara, VaraInfo, calculate_vara, hora_lord};
pub use yoga::{
    ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaInfo, YogaNature, calculate_yoga, yoga_from_sum,
};
