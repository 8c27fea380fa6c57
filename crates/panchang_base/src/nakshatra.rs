//! Nakshatra (lunar mansion) computation, 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, located by the Moon's sidereal longitude alone.
//! Each nakshatra has 4 padas (quarters) of 3 deg 20' each.

use panchang_math::{normalize_360, segment_index};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Lords of nakshatras 1..9, repeating three times around the circle.
const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitrs",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Tvashtar",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishve Devas",
            Self::Shravana => "Vishnu",
            Self::Dhanishtha => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Traditional symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ashwini => "Horse's Head",
            Self::Bharani => "Yoni",
            Self::Krittika => "Razor/Knife",
            Self::Rohini => "Cart/Chariot",
            Self::Mrigashira => "Deer's Head",
            Self::Ardra => "Teardrop/Diamond",
            Self::Punarvasu => "Bow and Quiver",
            Self::Pushya => "Cow's Udder",
            Self::Ashlesha => "Serpent",
            Self::Magha => "Throne",
            Self::PurvaPhalguni => "Front Legs of Bed",
            Self::UttaraPhalguni => "Back Legs of Bed",
            Self::Hasta => "Hand",
            Self::Chitra => "Bright Jewel",
            Self::Swati => "Young Shoot of Plant",
            Self::Vishakha => "Triumphal Arch",
            Self::Anuradha => "Lotus",
            Self::Jyeshtha => "Circular Amulet",
            Self::Mula => "Bunch of Roots",
            Self::PurvaAshadha => "Elephant Tusk",
            Self::UttaraAshadha => "Elephant Tusk",
            Self::Shravana => "Ear/Three Footprints",
            Self::Dhanishtha => "Drum",
            Self::Shatabhisha => "Empty Circle",
            Self::PurvaBhadrapada => "Front Legs of Funeral Cot",
            Self::UttaraBhadrapada => "Back Legs of Funeral Cot",
            Self::Revati => "Fish",
        }
    }

    /// Planetary lord (Vimshottari order).
    pub const fn lord(self) -> Graha {
        LORD_CYCLE[(self.index() % 9) as usize]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Moon's nakshatra with attributes and pada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// 1-based number (1 = Ashwini .. 27 = Revati).
    pub number: u8,
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    pub deity: &'static str,
    pub symbol: &'static str,
    pub lord: Graha,
    /// Start of the nakshatra on the ecliptic, degrees.
    pub start_degree: f64,
    /// End of the nakshatra (exclusive), degrees. 360 for Revati.
    pub end_degree: f64,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from the Moon's sidereal longitude.
pub fn calculate_nakshatra(moon_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(moon_lon_deg);
    let idx = segment_index(lon, NAKSHATRA_SPAN_27, 27);
    let nakshatra = ALL_NAKSHATRAS_27[idx as usize];
    let start_degree = idx as f64 * NAKSHATRA_SPAN_27;
    let degrees_in_nakshatra = (lon - start_degree).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    NakshatraInfo {
        number: idx + 1,
        nakshatra,
        name: nakshatra.name(),
        deity: nakshatra.deity(),
        symbol: nakshatra.symbol(),
        lord: nakshatra.lord(),
        start_degree,
        end_degree: (idx as f64 + 1.0) * NAKSHATRA_SPAN_27,
        pada,
        degrees_in_nakshatra,
    }
}
