//! Feasibility predicate over a constraint set plus implicit non-negativity.

use super::{constraint::ConstraintSet, types::Point2};

/// True iff `p` satisfies every constraint and `x1, x2 >= 0`, each with slack `eps`.
///
/// Pure and order-independent over `set`.
#[inline]
pub fn is_feasible(p: Point2, set: &ConstraintSet, eps: f64) -> bool {
    p.x >= -eps && p.y >= -eps && set.iter().all(|h| h.satisfies_eps(p, eps))
}
