//! Basic 2D types and tolerances used by the feasible-region engine.
//!
//! - `GeomCfg`: centralizes epsilons for determinant, feasibility, dedup and collinearity checks.
//! - `Point2`: decision-space point `(x1, x2)`.
//! - `Polygon`: CCW vertex ring (implicitly closed).

use nalgebra::Vector2;

/// Decision-space point `(x1, x2)`.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Pairs whose normals make an angle with `|sin| <= eps_det` are treated as parallel.
    pub eps_det: f64,
    /// Slack added to every inequality (including non-negativity).
    pub eps_feas: f64,
    /// Candidate points closer than this are merged.
    pub eps_dedup: f64,
    /// Relative turn below which a vertex counts as lying on a straight edge.
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
            eps_dedup: 1e-9,
            eps_collinear: 1e-9,
        }
    }
}

/// Ordered vertex ring; consecutive points (wrapping) are boundary edges.
///
/// Invariants:
/// - Counterclockwise order around the vertex centroid.
/// - No two vertices within `GeomCfg::eps_dedup` of each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// At least three vertices, i.e. something a renderer can fill.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Shoelace signed area; positive for CCW rings.
    pub fn signed_area(&self) -> f64 {
        let m = self.vertices.len();
        if m < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for k in 0..m {
            let p = self.vertices[k];
            let q = self.vertices[(k + 1) % m];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }

    /// Mean of the vertices, `None` for an empty ring.
    pub fn centroid(&self) -> Option<Point2> {
        super::order::centroid(&self.vertices)
    }

    /// Every turn along the ring is a left turn (or straight), within `eps`.
    pub fn is_convex_ccw(&self, eps: f64) -> bool {
        let m = self.vertices.len();
        if m < 3 {
            return false;
        }
        (0..m).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % m];
            let c = self.vertices[(k + 2) % m];
            crate::parallelogram_area(b - a, c - b) >= -eps
        })
    }

    /// Vertices as plain `[x1, x2]` pairs (renderer / serde friendly).
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.vertices.iter().map(|p| [p.x, p.y]).collect()
    }
}
