//! Small linear programs and their two-variable feasible-region geometry.
//!
//! Layout
//! - `geom2`: the feasible-region engine (constraint lines, pairwise
//!   intersections, feasibility filter, axis intercepts, angular ordering).
//! - `lp`: standard-form LP value types and the `LpSolver` seam (`microlp` backend).
//! - `production`, `transport`: the two problem formulations.
//! - `scene`: joins one region and one solve into a renderer-ready value.
//!
//! API Policy
//! - Everything here is pure and synchronous; all values are `Send + Sync`.
//! - Absence is `Option`, region outcomes are enums, malformed input is `Error`.

pub mod error;
pub mod geom2;
pub mod lp;
pub mod production;
pub mod scene;
pub mod transport;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        axis_intercepts, build_feasible_region, intersect, is_feasible, order_by_angle,
        Constraint, ConstraintSet, FeasibleRegion, GeomCfg, Point2, Polygon,
    };
    pub use crate::lp::{LpSolution, LpSolver, LpStatus, MicroLpSolver, StandardFormLp};
    pub use crate::production::{ProductionProblem, Resource};
    pub use crate::scene::Scene;
    pub use crate::transport::TransportProblem;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
