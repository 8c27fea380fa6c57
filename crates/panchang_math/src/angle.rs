//! Degree normalization and wrap-aware range helpers.

/// Degrees in one full revolution.
pub const DEG_PER_REV: f64 = 360.0;

/// Normalize an angle to [0, 360) degrees.
///
/// Works for inputs any number of revolutions away from the range. A tiny
/// negative input whose sum with 360 rounds to exactly 360.0 is folded to 0.0
/// so the half-open upper bound always holds.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % DEG_PER_REV;
    let r = if r < 0.0 { r + DEG_PER_REV } else { r };
    if r >= DEG_PER_REV { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % DEG_PER_REV;
    if d > 180.0 {
        d -= DEG_PER_REV;
    } else if d <= -180.0 {
        d += DEG_PER_REV;
    }
    d
}

/// Forward angular separation of `a` ahead of `b`, in [0, 360).
///
/// `angular_difference(moon, sun)` is the elongation that drives tithi and
/// karana.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    normalize_360(a - b)
}

/// Half-open, wrap-aware range membership.
///
/// `value` is normalized first. `start` and `end` are degrees in [0, 360].
/// When `start > end` the range crosses 0/360 and membership is
/// `value >= start || value < end`; otherwise it is `start <= value < end`.
pub fn in_range(value: f64, start: f64, end: f64) -> bool {
    let v = normalize_360(value);
    if start > end {
        v >= start || v < end
    } else {
        v >= start && v < end
    }
}

/// 0-based index of the equal segment of width `span` that contains `deg`.
///
/// The result is clamped to `count - 1`; the clamp only absorbs a floating
/// edge at exactly 360 and never triggers for values inside [0, 360).
pub fn segment_index(deg: f64, span: f64, count: u8) -> u8 {
    let lon = normalize_360(deg);
    let idx = (lon / span).floor() as u8;
    idx.min(count.saturating_sub(1))
}
