//! Vara (Vedic weekday) and hora (planetary hour) lords.
//!
//! The Vedic day runs from sunrise to sunrise, so the weekday is taken at
//! sunrise on the observer's local date. The first hora of the day belongs
//! to the weekday's lord; following horas step through the Chaldean order.

use panchang_time::weekday_from_jd;
use serde::{Deserialize, Serialize};

use crate::graha::{CHALDEAN_ORDER, Graha};

/// Horas in one Vedic day.
pub const HORA_COUNT: u8 = 24;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VARAS: [Vara; 7] = [
    Vara::Ravivara,
    Vara::Somavara,
    Vara::Mangalavara,
    Vara::Budhavara,
    Vara::Guruvara,
    Vara::Shukravara,
    Vara::Shanivara,
];

impl Vara {
    /// 0-based index (0 = Sunday).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivara => Graha::Surya,
            Self::Somavara => Graha::Chandra,
            Self::Mangalavara => Graha::Mangal,
            Self::Budhavara => Graha::Buddh,
            Self::Guruvara => Graha::Guru,
            Self::Shukravara => Graha::Shukra,
            Self::Shanivara => Graha::Shani,
        }
    }
}

/// Weekday at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaraInfo {
    /// 1-based number (1 = Sunday .. 7 = Saturday).
    pub number: u8,
    pub vara: Vara,
    pub name: &'static str,
    pub english_name: &'static str,
    pub lord: Graha,
}

/// Vara for the Vedic day beginning at `jd_sunrise` (UT).
///
/// The weekday is read on the local mean date (`jd + longitude/360`), so a
/// sunrise that falls on the previous UTC date east of Greenwich still
/// yields the local weekday.
pub fn calculate_vara(jd_sunrise: f64, longitude_deg: f64) -> VaraInfo {
    let weekday = weekday_from_jd(jd_sunrise + longitude_deg / 360.0);
    let vara = ALL_VARAS[(weekday % 7) as usize];
    VaraInfo {
        number: vara.index() + 1,
        vara,
        name: vara.name(),
        english_name: vara.english_name(),
        lord: vara.lord(),
    }
}

/// Lord of the `hora_index`-th hora (0-based, wraps at 24) of a Vedic day.
pub fn hora_lord(vara: Vara, hora_index: u8) -> Graha {
    let start = vara.lord().chaldean_index().unwrap_or(0);
    let step = (hora_index % HORA_COUNT) % 7;
    CHALDEAN_ORDER[((start + step) % 7) as usize]
}
