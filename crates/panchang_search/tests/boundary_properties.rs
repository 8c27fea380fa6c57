//! Property tests for boundary search convergence.

use panchang_math::normalize_360;
use panchang_search::{
    BoundarySearchConfig, SearchDirection, SearchError, find_boundary_time, segment_contains,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_crossings_found_within_precision(
        origin in 0.0f64..360.0,
        rate in 10.0f64..16.0,
    ) {
        let span = 12.0;
        let position = |t: f64| -> Result<f64, SearchError> { Ok(normalize_360(origin + rate * t)) };
        let check = |pos: f64, n: u8| segment_contains(pos, n, span);
        let number = (origin / span).floor() as u8 + 1;
        let cfg = BoundarySearchConfig::tithi();

        let end = find_boundary_time(0.0, number, check, position, SearchDirection::Forward, &cfg).unwrap();
        let start = find_boundary_time(0.0, number, check, position, SearchDirection::Backward, &cfg).unwrap();

        let seg_start = f64::from(number - 1) * span;
        let expected_end = (seg_start + span - origin) / rate;
        let expected_start = (seg_start - origin) / rate;
        prop_assert!(end.converged && start.converged);
        prop_assert!((end.jd - expected_end).abs() * 1440.0 < 1.0);
        prop_assert!((start.jd - expected_start).abs() * 1440.0 < 1.0);
        prop_assert!(start.jd <= 0.0 && end.jd >= 0.0);
    }
}
