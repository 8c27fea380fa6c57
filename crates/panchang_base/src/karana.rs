//! Karana (half-tithi) from the Moon-Sun elongation.
//!
//! The synodic month holds 60 karana slots of 6 deg each. Slots 1 and
//! 57-60 carry the four fixed karanas; slots 2-56 cycle eight times
//! through the seven movable karanas starting at Bava.

use panchang_math::{angular_difference, normalize_360, segment_index};
use serde::{Deserialize, Serialize};

/// Elongation covered by one karana, degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Movable karanas repeat; fixed ones occur once per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaranaType {
    Movable,
    Fixed,
}

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Nagava,
    Kimstughna,
}

/// Movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Nagava => "Nagava",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn karana_type(self) -> KaranaType {
        match self {
            Self::Shakuni | Self::Chatushpada | Self::Nagava | Self::Kimstughna => {
                KaranaType::Fixed
            }
            _ => KaranaType::Movable,
        }
    }

    /// Traditional character of the karana.
    pub const fn nature(self) -> &'static str {
        match self {
            Self::Bava => "Child-like, good for creative and joyful activities",
            Self::Balava => "Strong and powerful, good for strength-based activities",
            Self::Kaulava => "Of the family, good for family-related activities",
            Self::Taitila => "Sesame seed, good for detailed work",
            Self::Gara => "Poison, avoid important activities",
            Self::Vanija => "Merchant, good for business and trade",
            Self::Vishti => "Obstruction, very inauspicious - avoid all important work",
            Self::Shakuni => "Bird of ill omen, inauspicious",
            Self::Chatushpada => "Four-footed, stable and grounding",
            Self::Nagava => "Serpent, mysterious and transformative",
            Self::Kimstughna => "Destroyer of insects, good for destroying enemies",
        }
    }

    /// Karana occupying 1-based slot `number` (1-60) of the synodic month.
    ///
    /// Out-of-range numbers are clamped into 1..=60.
    pub const fn from_number(number: u8) -> Karana {
        let n = if number < 1 {
            1
        } else if number > 60 {
            60
        } else {
            number
        };
        match n {
            1 | 60 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Nagava,
            _ => MOVABLE_KARANAS[((n - 2) % 7) as usize],
        }
    }
}

/// Karana at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    /// 1-based slot in the synodic month (1-60).
    pub number: u8,
    pub karana: Karana,
    pub name: &'static str,
    pub karana_type: KaranaType,
    pub nature: &'static str,
    /// Vishti (Bhadra) karana, avoided for auspicious work.
    pub is_vishti: bool,
}

pub fn calculate_karana(sun_lon_deg: f64, moon_lon_deg: f64) -> KaranaInfo {
    karana_from_elongation(angular_difference(moon_lon_deg, sun_lon_deg))
}

/// Karana from a precomputed Moon-Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let angle = normalize_360(elongation_deg);
    let number = segment_index(angle, KARANA_SEGMENT_DEG, 60) + 1;
    let karana = Karana::from_number(number);
    KaranaInfo {
        number,
        karana,
        name: karana.name(),
        karana_type: karana.karana_type(),
        nature: karana.nature(),
        is_vishti: karana == Karana::Vishti,
    }
}
