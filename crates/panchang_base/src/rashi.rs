//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Given a sidereal longitude of either
//! luminary, we identify the rashi and its classical attributes.

use panchang_math::{normalize_360, segment_index};
use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element (tattva) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RashiQuality {
    /// Chara.
    Movable,
    /// Sthira.
    Fixed,
    /// Dvisvabhava.
    Dual,
}

impl RashiQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Movable => "Movable",
            Self::Fixed => "Fixed",
            Self::Dual => "Dual",
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Element, cycling Fire, Earth, Air, Water from Mesha.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Quality, cycling Movable, Fixed, Dual from Mesha.
    pub const fn quality(self) -> RashiQuality {
        match self.index() % 3 {
            0 => RashiQuality::Movable,
            1 => RashiQuality::Fixed,
            _ => RashiQuality::Dual,
        }
    }

    /// Planetary ruler.
    pub const fn ruler(self) -> Graha {
        rashi_lord(self)
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// 1-based rashi number (1 = Mesha .. 12 = Meena).
    pub number: u8,
    pub rashi: Rashi,
    pub name: &'static str,
    pub western_name: &'static str,
    pub element: Element,
    pub quality: RashiQuality,
    pub ruler: Graha,
    /// Start of the sign on the ecliptic, degrees.
    pub start_degree: f64,
    /// End of the sign on the ecliptic (exclusive), degrees.
    pub end_degree: f64,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine the rashi of a sidereal ecliptic longitude (Sun's or Moon's).
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn calculate_rashi(longitude_deg: f64) -> RashiInfo {
    let lon = normalize_360(longitude_deg);
    let idx = segment_index(lon, RASHI_SPAN_DEG, 12);
    let rashi = ALL_RASHIS[idx as usize];
    let start_degree = idx as f64 * RASHI_SPAN_DEG;
    let degrees_in_rashi = lon - start_degree;

    RashiInfo {
        number: idx + 1,
        rashi,
        name: rashi.name(),
        western_name: rashi.western_name(),
        element: rashi.element(),
        quality: rashi.quality(),
        ruler: rashi.ruler(),
        start_degree,
        end_degree: start_degree + RASHI_SPAN_DEG,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
