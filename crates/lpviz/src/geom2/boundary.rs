//! Axis-intercept candidates: the tightest single-resource cap on each axis.

use super::{constraint::ConstraintSet, types::Point2};

/// Decision-variable axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X1,
    X2,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X1 => 0,
            Axis::X2 => 1,
        }
    }
}

/// Smallest `limit / coeff` over constraints with a positive coefficient on `axis`.
///
/// Constraints with a zero (or negative) coefficient do not cap the variable
/// from above and are skipped rather than read as a zero cap.
/// `None` when nothing caps the axis.
pub fn axis_cap(set: &ConstraintSet, axis: Axis) -> Option<f64> {
    let k = axis.index();
    set.iter()
        .filter(|h| h.n[k] > 0.0)
        .map(|h| h.limit / h.n[k])
        .fold(None, |best: Option<f64>, cap| match best {
            Some(b) if b <= cap => Some(b),
            _ => Some(cap),
        })
}

/// Candidate boundary points: `(cap_x1, 0)`, `(0, cap_x2)` and the origin.
///
/// Not assumed feasible; callers filter them like any other candidate.
pub fn axis_intercepts(set: &ConstraintSet) -> Vec<Point2> {
    let mut out = Vec::with_capacity(3);
    out.push(Point2::zeros());
    if let Some(cap) = axis_cap(set, Axis::X1) {
        out.push(Point2::new(cap, 0.0));
    }
    if let Some(cap) = axis_cap(set, Axis::X2) {
        out.push(Point2::new(0.0, cap));
    }
    out
}
