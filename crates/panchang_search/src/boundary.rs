//! Start/end time search for the element containing a given instant.
//!
//! The search is generic over the element: the caller supplies a position
//! function (elongation, Moon longitude, longitude sum) and a range check
//! that says whether a position still belongs to a given element number.
//! Elements advance monotonically, so a single membership flip inside the
//! window is bracketed and bisected.

use log::{debug, warn};
use panchang_math::{in_range, normalize_360};

use crate::boundary_types::{BoundarySearch, BoundarySearchConfig, SearchDirection};
use crate::error::SearchError;

/// Whether `position_deg` lies in segment `number` (1-based) of width
/// `span_deg`, wrap-aware.
///
/// The last segment's end is folded to 0 so the range is read as crossing
/// 0/360 (Revati is [346.67, 0)).
pub fn segment_contains(position_deg: f64, number: u8, span_deg: f64) -> bool {
    if number == 0 {
        return false;
    }
    let start = f64::from(number - 1) * span_deg;
    let end = normalize_360(start + span_deg);
    in_range(position_deg, start, end)
}

/// Find the instant where the element `element_number` starts or ends.
///
/// `Forward` looks for the true-to-false flip of
/// `range_check(position(t), element_number)` after `current_jd`;
/// `Backward` looks for the false-to-true flip before it. The window is
/// `config.window_hours` long. When no flip exists in the window the window
/// edge is returned with `converged = false`.
pub fn find_boundary_time<R, P>(
    current_jd: f64,
    element_number: u8,
    range_check: R,
    position: P,
    direction: SearchDirection,
    config: &BoundarySearchConfig,
) -> Result<BoundarySearch, SearchError>
where
    R: Fn(f64, u8) -> bool,
    P: Fn(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;

    let inside = |t: f64| -> Result<bool, SearchError> {
        Ok(range_check(position(t)?, element_number))
    };

    if !inside(current_jd)? {
        warn!(
            "element {element_number} does not hold at jd {current_jd:.6}; boundary search skipped"
        );
        return Ok(BoundarySearch {
            jd: current_jd,
            converged: false,
        });
    }

    let window = config.window_days();
    // t_in always satisfies the element, t_out never does.
    let (mut t_in, mut t_out) = match direction {
        SearchDirection::Forward => (current_jd, current_jd + window),
        SearchDirection::Backward => (current_jd, current_jd - window),
    };

    if inside(t_out)? {
        warn!(
            "no {direction:?} boundary for element {element_number} within {} h of jd {current_jd:.6}; result may be imprecise",
            config.window_hours
        );
        return Ok(BoundarySearch {
            jd: t_out,
            converged: false,
        });
    }

    let precision = config.precision_days();
    let mut iterations = 0;
    while (t_out - t_in).abs() >= precision && iterations < config.max_iterations {
        let t_mid = 0.5 * (t_in + t_out);
        if inside(t_mid)? {
            t_in = t_mid;
        } else {
            t_out = t_mid;
        }
        iterations += 1;
    }

    let converged = (t_out - t_in).abs() < precision;
    let jd = 0.5 * (t_in + t_out);
    if converged {
        debug!(
            "{direction:?} boundary of element {element_number} at jd {jd:.6} after {iterations} iterations"
        );
    } else {
        warn!(
            "{direction:?} boundary of element {element_number} not within {} min after {iterations} iterations; result may be imprecise",
            config.precision_minutes
        );
    }

    Ok(BoundarySearch { jd, converged })
}
