//! Feasible-region geometry for two non-negative decision variables.
//!
//! Purpose
//! - Turn a set of capacity constraints `a·x1 + b·x2 <= limit` (plus implicit
//!   `x1, x2 >= 0`) into the ordered vertex ring of the feasible region.
//! - Keep every step a pure function over immutable inputs, eps-aware via `GeomCfg`.
//!
//! Pipeline
//! - `intersect`: pairwise line intersections (`None` for parallel pairs).
//! - `boundary`: axis intercepts at each variable's tightest cap.
//! - `feasibility`: filter candidates.
//! - `order`: dedup, sort by angle around the centroid, drop edge-interior points.
//! - `region`: orchestration, returning a `FeasibleRegion` state.
//!
//! Code cross-refs: `Constraint`, `ConstraintSet`, `Polygon`, `FeasibleRegion`

pub mod boundary;
mod constraint;
mod feasibility;
mod intersect;
pub mod order;
mod region;
mod types;

pub use boundary::{axis_cap, axis_intercepts, Axis};
pub use constraint::{Constraint, ConstraintSet};
pub use feasibility::is_feasible;
pub use intersect::{intersect, pairwise_intersections};
pub use order::{centroid, dedup_eps, drop_collinear, order_by_angle};
pub use region::{build_feasible_region, candidate_points, recession_direction, FeasibleRegion};
pub use types::{GeomCfg, Point2, Polygon};

#[cfg(test)]
mod tests;
