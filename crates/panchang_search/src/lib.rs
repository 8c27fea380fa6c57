//! Element boundary search and daily panchang assembly.
//!
//! This crate provides:
//! - Generic start/end search for any angular element (bisection over a
//!   bounded window, non-convergence reported as a flag)
//! - The `EphemerisProvider` seam for sidereal Sun/Moon longitudes, plus a
//!   linear mean-motion provider
//! - Tithi, Karana, Yoga and Nakshatra spans with UTC start/end times
//! - Full daily panchang evaluated at sunrise
//! - Regional rule hooks that rewrite display labels only

pub mod boundary;
pub mod boundary_types;
pub mod ephemeris;
pub mod error;
pub mod hook;
pub mod panchang;
pub mod panchang_types;

pub use boundary::{find_boundary_time, segment_contains};
pub use boundary_types::{BoundarySearch, BoundarySearchConfig, SearchDirection};
pub use ephemeris::{
    EphemerisProvider, Longitudes, MEAN_MOON_SPEED_DEG_PER_DAY, MEAN_SUN_SPEED_DEG_PER_DAY,
    MeanMotionEphemeris,
};
pub use error::SearchError;
pub use hook::{Capability, ElementLabel, HookRegistry, PanchangView, RegionalRuleHook};
pub use panchang::{karana_span, nakshatra_span, panchang_for_date, tithi_span, yoga_span};
pub use panchang_types::{ElementSpan, PanchangConfig, PanchangInfo};
