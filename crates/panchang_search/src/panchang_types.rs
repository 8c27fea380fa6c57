//! Types for element spans and daily panchang results.

use panchang_base::{
    GeoLocation, Graha, KaranaInfo, MuhurtaInfo, NakshatraInfo, RashiInfo, RiseSetConfig, SunTimes,
    TithiInfo, TraditionalPeriods, VaraInfo, YogaInfo,
};
use panchang_time::UtcTime;
use serde::Serialize;

use crate::boundary_types::BoundarySearchConfig;
use crate::ephemeris::Longitudes;

/// An element together with the instants it starts and ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSpan<T> {
    /// Classification at the evaluation instant.
    pub info: T,
    /// Start of the element (UTC).
    pub start: UtcTime,
    /// End of the element (UTC).
    pub end: UtcTime,
    /// False if either boundary search did not converge.
    pub precise: bool,
}

impl<T> ElementSpan<T> {
    /// Length of the span in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.end.minutes_since(&self.start)
    }

    /// Whether `t` falls inside [start, end).
    pub fn contains(&self, t: &UtcTime) -> bool {
        let jd = t.to_jd();
        jd >= self.start.to_jd() && jd < self.end.to_jd()
    }
}

/// Full panchang for one civil date at one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangInfo {
    /// The civil date (UTC midnight) this panchang was requested for.
    pub date: UtcTime,
    /// Observer location.
    pub location: GeoLocation,
    /// Sunrise and sunset, or the polar condition.
    pub sun_times: SunTimes,
    /// Instant the elements were evaluated at: sunrise, or local noon when
    /// the Sun does not cross the horizon.
    pub evaluated_at: UtcTime,
    /// Sidereal Sun/Moon longitudes at `evaluated_at`.
    pub longitudes: Longitudes,
    /// Weekday (sunrise to sunrise).
    pub vara: VaraInfo,
    /// Lord of the first hora of the day.
    pub hora_lord: Graha,
    /// Lunar day.
    pub tithi: ElementSpan<TithiInfo>,
    /// Moon's lunar mansion.
    pub nakshatra: ElementSpan<NakshatraInfo>,
    /// Luni-solar yoga.
    pub yoga: ElementSpan<YogaInfo>,
    /// Half-tithi.
    pub karana: ElementSpan<KaranaInfo>,
    /// Sign occupied by the Sun.
    pub sun_rashi: RashiInfo,
    /// Sign occupied by the Moon.
    pub moon_rashi: RashiInfo,
    /// Rahu Kalam, Yamagandam, Gulika Kalam and Abhijit. `None` without a
    /// sunrise and sunset.
    pub periods: Option<TraditionalPeriods>,
    /// The 30 muhurtas up to the next sunrise. `None` when either sunrise is
    /// missing.
    pub muhurtas: Option<[MuhurtaInfo; 30]>,
}

impl PanchangInfo {
    /// True when every boundary search converged.
    pub fn all_precise(&self) -> bool {
        self.tithi.precise && self.nakshatra.precise && self.yoga.precise && self.karana.precise
    }
}

/// Configuration for daily panchang assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangConfig {
    /// Sunrise/sunset horizon model.
    pub riseset: RiseSetConfig,
    /// Tithi boundary search.
    pub tithi: BoundarySearchConfig,
    /// Nakshatra boundary search.
    pub nakshatra: BoundarySearchConfig,
    /// Yoga boundary search.
    pub yoga: BoundarySearchConfig,
    /// Karana boundary search.
    pub karana: BoundarySearchConfig,
}

impl PanchangConfig {
    /// Default horizon model with the per-element search presets.
    pub fn new() -> Self {
        Self {
            riseset: RiseSetConfig::default(),
            tithi: BoundarySearchConfig::tithi(),
            nakshatra: BoundarySearchConfig::nakshatra(),
            yoga: BoundarySearchConfig::yoga(),
            karana: BoundarySearchConfig::karana(),
        }
    }

    /// Validate every nested configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.riseset.validate()?;
        self.tithi.validate()?;
        self.nakshatra.validate()?;
        self.yoga.validate()?;
        self.karana.validate()
    }
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self::new()
    }
}
