//! Pairwise constraint-line intersection (2×2 determinant rule).

use nalgebra::matrix;

use super::{constraint::Constraint, types::Point2};

/// Intersection of the boundary lines of `h1` and `h2`, both taken as equalities:
///
/// ```text
/// a1·x1 + b1·x2 = c1
/// a2·x1 + b2·x2 = c2
/// ```
///
/// Returns `None` when `|a1·b2 - a2·b1| <= eps_det · |(a1, b1)| · |(a2, b2)|`, i.e.
/// the sine of the angle between the lines is below `eps_det` (parallel or
/// coincident lines, or a row of zeros); that is an expected outcome, not an
/// error. The point is not rounded.
pub fn intersect(h1: &Constraint, h2: &Constraint, eps_det: f64) -> Option<Point2> {
    let (a1, b1, c1) = h1.as_equation_row();
    let (a2, b2, c2) = h2.as_equation_row();
    let det = matrix![a1, b1; a2, b2].determinant();
    let scale = h1.n.norm() * h2.n.norm();
    if !det.is_finite() || det.abs() <= eps_det * scale {
        return None;
    }
    // Cramer's rule
    let x1 = (c1 * b2 - c2 * b1) / det;
    let x2 = (a1 * c2 - a2 * c1) / det;
    // + 0.0 turns -0.0 into 0.0
    Some(Point2::new(x1 + 0.0, x2 + 0.0))
}

/// Intersections of every unordered constraint pair that has one.
pub fn pairwise_intersections<'a, I>(pairs: I, eps_det: f64) -> Vec<Point2>
where
    I: IntoIterator<Item = (&'a Constraint, &'a Constraint)>,
{
    pairs
        .into_iter()
        .filter_map(|(h1, h2)| {
            let p = intersect(h1, h2, eps_det);
            if p.is_none() {
                tracing::trace!(a = ?h1.label, b = ?h2.label, "parallel pair skipped");
            }
            p
        })
        .collect()
}
