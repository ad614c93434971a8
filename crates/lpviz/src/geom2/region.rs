//! Feasible-region builder: candidates → filter → dedup → angular order → drop
//! edge-interior points.
//!
//! This is the one entry point renderers should call; they must not
//! re-assemble the steps themselves.

use super::boundary::axis_intercepts;
use super::constraint::{Constraint, ConstraintSet};
use super::feasibility::is_feasible;
use super::intersect::{intersect, pairwise_intersections};
use super::order::{dedup_eps, drop_collinear, order_by_angle};
use super::types::{GeomCfg, Point2, Polygon};

/// Outcome of building the feasible region.
#[derive(Clone, Debug, PartialEq)]
pub enum FeasibleRegion {
    /// No candidate point survived: the instance is infeasible.
    Empty,
    /// Region extends to infinity along `direction` (unit, `>= 0` componentwise).
    /// `vertices` holds the ordered feasible candidates that were found.
    Unbounded {
        direction: Point2,
        vertices: Polygon,
    },
    /// One or two distinct points (a point or a segment).
    Degenerate(Vec<Point2>),
    /// Bounded polygon with at least three CCW vertices.
    Polygon(Polygon),
}

impl FeasibleRegion {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, FeasibleRegion::Empty)
    }
    #[inline]
    pub fn is_bounded(&self) -> bool {
        !matches!(self, FeasibleRegion::Unbounded { .. })
    }
    /// Ordered vertices in every case (empty for `Empty`).
    pub fn vertices(&self) -> &[Point2] {
        match self {
            FeasibleRegion::Empty => &[],
            FeasibleRegion::Unbounded { vertices, .. } => &vertices.vertices,
            FeasibleRegion::Degenerate(pts) => pts,
            FeasibleRegion::Polygon(poly) => &poly.vertices,
        }
    }
    /// The polygon, if the region is bounded and renderable.
    #[inline]
    pub fn polygon(&self) -> Option<&Polygon> {
        if let FeasibleRegion::Polygon(p) = self {
            Some(p)
        } else {
            None
        }
    }
}

/// Unfiltered candidate vertices: pairwise intersections, axis crossings of
/// every constraint line, and the axis intercepts (origin included).
pub fn candidate_points(set: &ConstraintSet, cfg: GeomCfg) -> Vec<Point2> {
    let mut cands = pairwise_intersections(set.pairs(), cfg.eps_det);
    // x2 = 0 and x1 = 0 written as constraints so the same solver applies.
    let axes = [Constraint::new(0.0, 1.0, 0.0), Constraint::new(1.0, 0.0, 0.0)];
    for h in set.iter() {
        cands.extend(axes.iter().filter_map(|ax| intersect(h, ax, cfg.eps_det)));
    }
    cands.extend(axis_intercepts(set));
    cands
}

/// Direction `d >= 0`, `d != 0`, with `n·d <= 0` for every constraint, if any.
/// The slack on `n·d` scales with `|n|`.
///
/// In 2D the recession cone of the region is spanned by rays lying on the
/// axes or on constraint lines, so those are the only directions checked.
pub fn recession_direction(set: &ConstraintSet, eps: f64) -> Option<Point2> {
    let mut dirs = vec![Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
    for h in set.iter() {
        let t = Point2::new(-h.n.y, h.n.x);
        let norm = t.norm();
        if norm > 0.0 && norm.is_finite() {
            dirs.push(t / norm);
            dirs.push(-t / norm);
        }
    }
    dirs.into_iter().find(|d| {
        d.x >= -eps && d.y >= -eps && set.iter().all(|h| h.n.dot(d) <= eps * h.n.norm())
    })
}

/// Build the feasible region of `set` (with implicit `x1, x2 >= 0`).
pub fn build_feasible_region(set: &ConstraintSet, cfg: GeomCfg) -> FeasibleRegion {
    let cands = candidate_points(set, cfg);
    let total = cands.len();
    let feasible: Vec<Point2> = cands
        .into_iter()
        .filter(|p| is_feasible(*p, set, cfg.eps_feas))
        .collect();
    let distinct = dedup_eps(feasible, cfg.eps_dedup);
    tracing::debug!(
        constraints = set.len(),
        candidates = total,
        vertices = distinct.len(),
        "feasible region candidates"
    );
    if distinct.is_empty() {
        return FeasibleRegion::Empty;
    }
    if let Some(direction) = recession_direction(set, cfg.eps_feas) {
        tracing::debug!(dx = direction.x, dy = direction.y, "unbounded region");
        return FeasibleRegion::Unbounded {
            direction,
            vertices: order_by_angle(distinct),
        };
    }
    let ring = drop_collinear(order_by_angle(distinct), cfg.eps_collinear);
    if ring.is_renderable() {
        FeasibleRegion::Polygon(ring)
    } else {
        FeasibleRegion::Degenerate(ring.vertices)
    }
}
