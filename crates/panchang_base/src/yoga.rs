//! Yoga from the sum of the Sun and Moon sidereal longitudes.
//!
//! The sum, taken mod 360, is divided into 27 segments of 13 deg 20'.
//! Unlike tithi the ayanamsha does not cancel, so both inputs must be
//! sidereal.

use panchang_math::{normalize_360, segment_index};
use serde::{Deserialize, Serialize};

/// Combined longitude covered by one yoga, degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Whether a yoga favours new undertakings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaNature {
    Auspicious,
    Inauspicious,
    Mixed,
}

impl YogaNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Inauspicious => "Inauspicious",
            Self::Mixed => "Mixed",
        }
    }
}

/// The 27 yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// 0-based index (0 = Vishkambha .. 26 = Vaidhriti).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Vishkambha => "Obstructive, delays and obstacles",
            Self::Priti => "Love and affection, good for relationships",
            Self::Ayushman => "Longevity, health and vitality",
            Self::Saubhagya => "Good fortune, prosperity and happiness",
            Self::Shobhana => "Beauty, auspicious for ceremonies",
            Self::Atiganda => "Great danger, avoid important work",
            Self::Sukarma => "Good deeds, meritorious actions",
            Self::Dhriti => "Determination, steadfastness",
            Self::Shula => "Pain and suffering, inauspicious",
            Self::Ganda => "Danger, avoid travel and new ventures",
            Self::Vriddhi => "Growth and prosperity",
            Self::Dhruva => "Stability, permanent gains",
            Self::Vyaghata => "Destruction, avoid important work",
            Self::Harshana => "Joy and happiness",
            Self::Vajra => "Diamond-like strength, can be harsh",
            Self::Siddhi => "Success and achievement",
            Self::Vyatipata => "Great calamity, very inauspicious",
            Self::Variyana => "Choice and selection, mixed results",
            Self::Parigha => "Iron rod, obstacles and delays",
            Self::Shiva => "Auspicious, beneficial for all activities",
            Self::Siddha => "Accomplished, success assured",
            Self::Sadhya => "Achievable, goals can be accomplished",
            Self::Shubha => "Pure and auspicious",
            Self::Shukla => "Bright and pure",
            Self::Brahma => "Divine, highly auspicious",
            Self::Indra => "Royal, powerful and prosperous",
            Self::Vaidhriti => "Separation, avoid joint ventures",
        }
    }

    pub const fn nature(self) -> YogaNature {
        match self {
            Self::Vishkambha
            | Self::Atiganda
            | Self::Shula
            | Self::Ganda
            | Self::Vyaghata
            | Self::Vyatipata
            | Self::Parigha
            | Self::Vaidhriti => YogaNature::Inauspicious,
            Self::Vajra | Self::Variyana => YogaNature::Mixed,
            _ => YogaNature::Auspicious,
        }
    }
}

/// Yoga at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    /// 1-based yoga number (1-27).
    pub number: u8,
    pub yoga: Yoga,
    pub name: &'static str,
    pub meaning: &'static str,
    pub nature: YogaNature,
    /// (Sun + Moon) mod 360, degrees.
    pub combined_longitude: f64,
}

pub fn calculate_yoga(sun_lon_deg: f64, moon_lon_deg: f64) -> YogaInfo {
    yoga_from_sum(sun_lon_deg + moon_lon_deg)
}

/// Yoga from a precomputed Sun + Moon sum (normalized here).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let combined = normalize_360(sum_deg);
    let idx = segment_index(combined, YOGA_SEGMENT_DEG, 27);
    let yoga = ALL_YOGAS[idx as usize];
    YogaInfo {
        number: idx + 1,
        yoga,
        name: yoga.name(),
        meaning: yoga.meaning(),
        nature: yoga.nature(),
        combined_longitude: combined,
    }
}
