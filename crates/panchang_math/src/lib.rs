//! Angle arithmetic shared by every panchang calculation.
//!
//! This crate provides:
//! - Normalization of arbitrary degree values into [0, 360)
//! - Canonical Moon-minus-Sun style angular differences
//! - Wrap-aware half-open range membership (ranges may cross 0/360)
//! - Equal-segment indexing used by tithi, nakshatra, yoga, karana and rashi
//!
//! All functions are pure and allocation-free.

pub mod angle;

pub use angle::{
    DEG_PER_REV, angular_difference, in_range, normalize_360, normalize_to_pm180, segment_index,
};
