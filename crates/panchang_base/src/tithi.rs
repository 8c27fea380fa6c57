//! Tithi (lunar day) from the Moon-Sun elongation.
//!
//! A synodic month is divided into 30 tithis of 12 deg of elongation each.
//! Tithis 1-15 form the Shukla (waxing) paksha ending at Purnima; 16-30 the
//! Krishna (waning) paksha ending at Amavasya.

use panchang_math::{angular_difference, normalize_360, segment_index};
use serde::{Deserialize, Serialize};

/// Elongation covered by one tithi, degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of paksha days 1-14; day 15 is Purnima or Amavasya.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

const PAKSHA_DAY_DEITIES: [&str; 14] = [
    "Agni",
    "Brahma",
    "Gauri",
    "Ganesha",
    "Naga",
    "Kartikeya",
    "Surya",
    "Rudra",
    "Durga",
    "Yama",
    "Vishvedevas",
    "Vishnu",
    "Kamadeva",
    "Shiva",
];

/// Five-fold grouping of paksha days (Nanda, Bhadra, Jaya, Rikta, Purna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TithiCategory {
    /// Days 1, 6, 11.
    Nanda,
    /// Days 2, 7, 12.
    Bhadra,
    /// Days 3, 8, 13.
    Jaya,
    /// Days 4, 9, 14.
    Rikta,
    /// Days 5, 10, 15.
    Purna,
}

impl TithiCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanda => "Nanda",
            Self::Bhadra => "Bhadra",
            Self::Jaya => "Jaya",
            Self::Rikta => "Rikta",
            Self::Purna => "Purna",
        }
    }
}

impl Tithi {
    /// 0-based index (0 = Shukla Pratipada .. 29 = Amavasya).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1-15).
    pub const fn tithi_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Traditional name; days 1-14 repeat in both pakshas.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_DAY_NAMES[(self.tithi_in_paksha() - 1) as usize],
        }
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Purnima => "Chandra",
            Self::Amavasya => "Pitris",
            _ => PAKSHA_DAY_DEITIES[(self.tithi_in_paksha() - 1) as usize],
        }
    }

    pub const fn category(self) -> TithiCategory {
        match (self.tithi_in_paksha() - 1) % 5 {
            0 => TithiCategory::Nanda,
            1 => TithiCategory::Bhadra,
            2 => TithiCategory::Jaya,
            3 => TithiCategory::Rikta,
            _ => TithiCategory::Purna,
        }
    }
}

/// Tithi at an instant, derived from the Moon-Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 1-based tithi number (1-30).
    pub number: u8,
    pub tithi: Tithi,
    pub name: &'static str,
    pub paksha: Paksha,
    pub deity: &'static str,
    pub category: TithiCategory,
    /// 1-based day within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Moon-Sun elongation in degrees [0, 360).
    pub angle: f64,
    /// Progress through the current tithi, [0, 100).
    pub percent_complete: f64,
}

/// Tithi from sidereal (or tropical; only the difference matters) Sun and
/// Moon longitudes.
pub fn calculate_tithi(sun_lon_deg: f64, moon_lon_deg: f64) -> TithiInfo {
    tithi_from_elongation(angular_difference(moon_lon_deg, sun_lon_deg))
}

/// Tithi from a precomputed Moon-Sun elongation.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let angle = normalize_360(elongation_deg);
    let idx = segment_index(angle, TITHI_SEGMENT_DEG, 30);
    let tithi = ALL_TITHIS[idx as usize];
    let into = (angle - idx as f64 * TITHI_SEGMENT_DEG).max(0.0);
    let percent = into / TITHI_SEGMENT_DEG * 100.0;

    TithiInfo {
        number: idx + 1,
        tithi,
        name: tithi.name(),
        paksha: tithi.paksha(),
        deity: tithi.deity(),
        category: tithi.category(),
        tithi_in_paksha: tithi.tithi_in_paksha(),
        angle,
        percent_complete: percent,
    }
}
