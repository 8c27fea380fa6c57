//! Sunrise-based divisions of the Vedic day.
//!
//! Daylight (sunrise to sunset) is split into 8 equal parts for Rahu Kalam,
//! Yamagandam and Gulika Kalam, and into 15 day muhurtas; the night (sunset
//! to next sunrise) holds the other 15 muhurtas. Horas are 24 equal parts of
//! the whole sunrise-to-sunrise day.

use log::debug;
use panchang_time::UtcTime;
use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::riseset::calculate_sun_times;
use crate::riseset_types::{GeoLocation, RiseSetConfig};
use crate::vara::{HORA_COUNT, Vara, calculate_vara, hora_lord};

/// Equal parts of daylight used for the kalams.
pub const DAY_PARTS: u8 = 8;

/// Muhurtas between sunrise and sunset (and again between sunset and the
/// next sunrise).
pub const DAY_MUHURTAS: u8 = 15;

/// Muhurtas in a full Vedic day.
pub const MUHURTA_COUNT: u8 = 30;

/// 0-based index of Abhijit among the day muhurtas.
pub const ABHIJIT_INDEX: u8 = 7;

// 1-based eighth of daylight, Sunday first.
const RAHU_KALAM_PART: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
const YAMAGANDAM_PART: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKA_KALAM_PART: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Muhurta names from sunrise, day muhurtas first.
pub const MUHURTA_NAMES: [&str; 30] = [
    "Rudra",
    "Ahi",
    "Mitra",
    "Pritas",
    "Vasu",
    "Varaha",
    "Vishve",
    "Abhijit",
    "Savitri",
    "Aditya",
    "Sadhya",
    "Ganga",
    "Brahma",
    "Yamya",
    "Vasu",
    "Varuna",
    "Aryama",
    "Bhaga",
    "Girish",
    "Dhanvantari",
    "Ananda",
    "Rakshasa",
    "Sarpa",
    "Shakra",
    "Indra",
    "Vayu",
    "Dhruva",
    "Vaidhriti",
    "Ketu",
    "Shubha",
];

/// Named periods of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayPeriod {
    RahuKalam,
    Yamagandam,
    GulikaKalam,
    AbhijitMuhurta,
}

impl DayPeriod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKalam => "Rahu Kalam",
            Self::Yamagandam => "Yamagandam",
            Self::GulikaKalam => "Gulika Kalam",
            Self::AbhijitMuhurta => "Abhijit Muhurta",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::AbhijitMuhurta)
    }

    /// 1-based eighth of daylight the period occupies on `vara`.
    ///
    /// `None` for Abhijit, which is a muhurta rather than an eighth.
    pub const fn part(self, vara: Vara) -> Option<u8> {
        let i = vara.index() as usize;
        match self {
            Self::RahuKalam => Some(RAHU_KALAM_PART[i]),
            Self::Yamagandam => Some(YAMAGANDAM_PART[i]),
            Self::GulikaKalam => Some(GULIKA_KALAM_PART[i]),
            Self::AbhijitMuhurta => None,
        }
    }
}

/// One named period with its UTC bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePeriod {
    pub period: DayPeriod,
    pub start: UtcTime,
    pub end: UtcTime,
    pub auspicious: bool,
}

impl TimePeriod {
    pub fn duration_minutes(&self) -> f64 {
        self.end.minutes_since(&self.start)
    }

    /// Whether `t` falls inside [start, end).
    pub fn contains(&self, t: &UtcTime) -> bool {
        let jd = t.to_jd();
        jd >= self.start.to_jd() && jd < self.end.to_jd()
    }
}

/// The four named periods of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraditionalPeriods {
    pub rahu_kalam: TimePeriod,
    pub yamagandam: TimePeriod,
    pub gulika_kalam: TimePeriod,
    pub abhijit_muhurta: TimePeriod,
}

/// Coarse quality of a muhurta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MuhurtaQuality {
    Excellent,
    Good,
    Neutral,
}

impl MuhurtaQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
        }
    }

    const fn for_index(index: u8) -> Self {
        match index {
            ABHIJIT_INDEX => Self::Excellent,
            5..=9 => Self::Good,
            _ => Self::Neutral,
        }
    }
}

/// One of the 30 muhurtas of a Vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuhurtaInfo {
    /// 1-based number from sunrise (1..=30).
    pub number: u8,
    pub name: &'static str,
    pub quality: MuhurtaQuality,
    /// True for the 15 muhurtas between sunrise and sunset.
    pub is_day: bool,
    pub start: UtcTime,
    pub end: UtcTime,
}

/// Hora (planetary hour) with its UTC bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoraInfo {
    /// Ruling planet.
    pub lord: Graha,
    /// 0-based hora index within the Vedic day (0..24).
    pub hora_index: u8,
    pub start: UtcTime,
    pub end: UtcTime,
}

fn check_interval(start_jd: f64, end_jd: f64) -> Result<(), VedicError> {
    if start_jd.is_finite() && end_jd.is_finite() && end_jd > start_jd {
        Ok(())
    } else {
        Err(VedicError::InvalidInterval { start_jd, end_jd })
    }
}

/// Start and end JD of the `index`-th (0-based) of `parts` equal portions
/// of [start_jd, end_jd].
pub fn portion_jd_range(index: u8, parts: u8, start_jd: f64, end_jd: f64) -> (f64, f64) {
    let portion = (end_jd - start_jd) / parts as f64;
    let start = start_jd + index as f64 * portion;
    (start, start + portion)
}

/// One named period of the daylight between `sunrise` and `sunset`.
pub fn day_period(
    period: DayPeriod,
    sunrise: &UtcTime,
    sunset: &UtcTime,
    vara: Vara,
) -> Result<TimePeriod, VedicError> {
    let (rise, set) = (sunrise.to_jd(), sunset.to_jd());
    check_interval(rise, set)?;
    let (start, end) = match period.part(vara) {
        Some(part) => portion_jd_range(part - 1, DAY_PARTS, rise, set),
        None => portion_jd_range(ABHIJIT_INDEX, DAY_MUHURTAS, rise, set),
    };
    Ok(TimePeriod {
        period,
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
        auspicious: period.is_auspicious(),
    })
}

/// Rahu Kalam, Yamagandam, Gulika Kalam and Abhijit for one day.
pub fn calculate_traditional_periods(
    sunrise: &UtcTime,
    sunset: &UtcTime,
    vara: Vara,
) -> Result<TraditionalPeriods, VedicError> {
    Ok(TraditionalPeriods {
        rahu_kalam: day_period(DayPeriod::RahuKalam, sunrise, sunset, vara)?,
        yamagandam: day_period(DayPeriod::Yamagandam, sunrise, sunset, vara)?,
        gulika_kalam: day_period(DayPeriod::GulikaKalam, sunrise, sunset, vara)?,
        abhijit_muhurta: day_period(DayPeriod::AbhijitMuhurta, sunrise, sunset, vara)?,
    })
}

/// All 30 muhurtas from `sunrise` to `next_sunrise`.
pub fn calculate_muhurtas(
    sunrise: &UtcTime,
    sunset: &UtcTime,
    next_sunrise: &UtcTime,
) -> Result<[MuhurtaInfo; 30], VedicError> {
    let (rise, set, next) = (sunrise.to_jd(), sunset.to_jd(), next_sunrise.to_jd());
    check_interval(rise, set)?;
    check_interval(set, next)?;

    Ok(std::array::from_fn(|i| {
        let index = i as u8;
        let is_day = index < DAY_MUHURTAS;
        let (start, end) = if is_day {
            portion_jd_range(index, DAY_MUHURTAS, rise, set)
        } else {
            portion_jd_range(index - DAY_MUHURTAS, DAY_MUHURTAS, set, next)
        };
        MuhurtaInfo {
            number: index + 1,
            name: MUHURTA_NAMES[i],
            quality: MuhurtaQuality::for_index(index),
            is_day,
            start: UtcTime::from_jd(start),
            end: UtcTime::from_jd(end),
        }
    }))
}

/// Hora containing `jd` within the Vedic day [sunrise_jd, next_sunrise_jd).
///
/// Instants outside the day are clamped to its first or last hora.
pub fn hora_from_sunrises(
    jd: f64,
    sunrise_jd: f64,
    next_sunrise_jd: f64,
    vara: Vara,
) -> Result<HoraInfo, VedicError> {
    check_interval(sunrise_jd, next_sunrise_jd)?;
    let hora_days = (next_sunrise_jd - sunrise_jd) / HORA_COUNT as f64;
    let raw = ((jd - sunrise_jd) / hora_days).floor();
    let hora_index = raw.clamp(0.0, (HORA_COUNT - 1) as f64) as u8;
    let (start, end) = portion_jd_range(hora_index, HORA_COUNT, sunrise_jd, next_sunrise_jd);

    Ok(HoraInfo {
        lord: hora_lord(vara, hora_index),
        hora_index,
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
    })
}

/// Sunrise starting the Vedic day that contains `t`, and the one ending it.
///
/// `None` when polar day or night leaves no pair of consecutive sunrises
/// around `t`.
pub fn vedic_day_sunrises(
    location: &GeoLocation,
    t: &UtcTime,
    config: &RiseSetConfig,
) -> Result<Option<(UtcTime, UtcTime)>, VedicError> {
    let jd = t.to_jd();
    let jd_0h = t.jd_midnight();
    let mut sunrises = Vec::with_capacity(4);
    for offset in -1..=2 {
        let day = UtcTime::from_jd(jd_0h + offset as f64);
        if let Some(sunrise) = calculate_sun_times(location, &day, config)?.sunrise() {
            sunrises.push(sunrise);
        }
    }

    Ok(sunrises
        .windows(2)
        .find(|w| {
            let (a, b) = (w[0].to_jd(), w[1].to_jd());
            a <= jd && jd < b && b - a < 1.5
        })
        .map(|w| (w[0], w[1])))
}

/// Hora at instant `t` for an observer at `location`.
///
/// Returns `None` when the surrounding Vedic day has no sunrise.
pub fn hora_at_time(
    location: &GeoLocation,
    t: &UtcTime,
    config: &RiseSetConfig,
) -> Result<Option<HoraInfo>, VedicError> {
    t.validate()?;
    let Some((sunrise, next_sunrise)) = vedic_day_sunrises(location, t, config)? else {
        debug!("no bracketing sunrises for {t} at lat {}", location.latitude_deg);
        return Ok(None);
    };
    let vara = calculate_vara(sunrise.to_jd(), location.longitude_deg).vara;
    hora_from_sunrises(t.to_jd(), sunrise.to_jd(), next_sunrise.to_jd(), vara).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vara::ALL_VARAS;

    fn at(h: u32, m: u32) -> UtcTime {
        UtcTime::new(2024, 4, 7, h, m, 0.0)
    }

    fn assert_near(t: &UtcTime, expected: &UtcTime) {
        let diff = t.minutes_since(expected).abs();
        assert!(diff < 1e-3, "{t} vs {expected}");
    }

    #[test]
    fn part_tables_cover_distinct_eighths() {
        for v in ALL_VARAS {
            let r = DayPeriod::RahuKalam.part(v);
            let y = DayPeriod::Yamagandam.part(v);
            let g = DayPeriod::GulikaKalam.part(v);
            assert!(r != y && y != g && r != g, "{v:?}");
            for p in [r, y, g] {
                assert!(matches!(p, Some(1..=8)));
            }
        }
        assert_eq!(DayPeriod::AbhijitMuhurta.part(Vara::Ravivara), None);
    }

    #[test]
    fn rahu_kalam_monday_second_eighth() {
        let p = day_period(DayPeriod::RahuKalam, &at(6, 0), &at(18, 0), Vara::Somavara).unwrap();
        assert_near(&p.start, &at(7, 30));
        assert_near(&p.end, &at(9, 0));
        assert!(!p.auspicious);
    }

    #[test]
    fn abhijit_straddles_midday() {
        let p = day_period(DayPeriod::AbhijitMuhurta, &at(6, 0), &at(18, 0), Vara::Ravivara)
            .unwrap();
        assert_near(&p.start, &at(11, 36));
        assert_near(&p.end, &at(12, 24));
        assert!(p.auspicious);
        assert!(p.contains(&at(12, 0)));
    }

    #[test]
    fn reversed_interval_rejected() {
        let r = calculate_traditional_periods(&at(18, 0), &at(6, 0), Vara::Ravivara);
        assert!(matches!(r, Err(VedicError::InvalidInterval { .. })));
    }

    #[test]
    fn muhurtas_tile_the_day() {
        let next = UtcTime::new(2024, 4, 8, 6, 0, 0.0);
        let m = calculate_muhurtas(&at(6, 0), &at(18, 0), &next).unwrap();
        assert_near(&m[0].start, &at(6, 0));
        assert_near(&m[14].end, &at(18, 0));
        assert_near(&m[29].end, &next);
        for pair in m.windows(2) {
            assert_near(&pair[0].end, &pair[1].start);
        }
        assert_eq!(m[7].name, "Abhijit");
        assert_eq!(m[7].quality, MuhurtaQuality::Excellent);
        assert!(m[14].is_day && !m[15].is_day);
        assert_eq!(m[29].number, 30);
    }

    #[test]
    fn hora_index_and_clamping() {
        let rise = at(6, 0).to_jd();
        let next = rise + 1.0;
        let h = hora_from_sunrises(rise + 2.5 / 24.0, rise, next, Vara::Ravivara).unwrap();
        assert_eq!(h.hora_index, 2);
        assert_eq!(h.lord, Graha::Buddh);
        assert_near(&h.start, &at(8, 0));

        let before = hora_from_sunrises(rise - 0.1, rise, next, Vara::Ravivara).unwrap();
        assert_eq!(before.hora_index, 0);
        let after = hora_from_sunrises(next + 0.1, rise, next, Vara::Ravivara).unwrap();
        assert_eq!(after.hora_index, HORA_COUNT - 1);
    }

    #[test]
    fn portion_range_is_equal_split() {
        let (s, e) = portion_jd_range(3, 8, 0.0, 8.0);
        assert_eq!((s, e), (3.0, 4.0));
    }
}
