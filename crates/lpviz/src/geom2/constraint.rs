//! Capacity constraints `a·x1 + b·x2 <= limit` and their sets.

use nalgebra::Vector2;

use super::types::Point2;
use crate::error::{Error, Result};

/// Closed half-plane `n · x <= limit` over the decision variables `(x1, x2)`.
///
/// No normalization: coefficients are the problem's resource rates, kept as given.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub n: Vector2<f64>,
    pub limit: f64,
    /// Diagnostics only; identity is positional.
    pub label: Option<String>,
}

impl Constraint {
    #[inline]
    pub fn new(coeff_x1: f64, coeff_x2: f64, limit: f64) -> Self {
        Self {
            n: Vector2::new(coeff_x1, coeff_x2),
            limit,
            label: None,
        }
    }

    #[inline]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn coeff_x1(&self) -> f64 {
        self.n.x
    }
    #[inline]
    pub fn coeff_x2(&self) -> f64 {
        self.n.y
    }

    /// Raw `(coeff_x1, coeff_x2, limit)` for equation solving.
    #[inline]
    pub fn as_equation_row(&self) -> (f64, f64, f64) {
        (self.n.x, self.n.y, self.limit)
    }

    /// Boundary x2 for a given x1: `(limit - coeff_x1·x1) / coeff_x2`.
    ///
    /// Lines with `coeff_x2 = 0` only bound x1 and have no such function.
    pub fn value_at(&self, x1: f64) -> Result<f64> {
        if self.n.y == 0.0 {
            return Err(Error::DivisionByZero {
                label: self.label.clone(),
            });
        }
        Ok((self.limit - self.n.x * x1) / self.n.y)
    }

    /// Left-hand side `coeff_x1·x1 + coeff_x2·x2`.
    #[inline]
    pub fn lhs(&self, p: Point2) -> f64 {
        self.n.dot(&p)
    }

    /// Unused capacity at `p` (negative when violated).
    #[inline]
    pub fn slack(&self, p: Point2) -> f64 {
        self.limit - self.lhs(p)
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Point2, eps: f64) -> bool {
        self.lhs(p) <= self.limit + eps
    }

    #[inline]
    pub fn is_binding(&self, p: Point2, eps: f64) -> bool {
        self.slack(p).abs() <= eps
    }

    /// Boundary polyline over `x1 ∈ [lo, hi]` with `samples` points (at least 2).
    ///
    /// Vertical lines (`coeff_x2 = 0`) come back as a segment at
    /// `x1 = limit / coeff_x1` spanning the same extent on the x2 axis.
    /// A line with both coefficients zero has no boundary and yields nothing.
    pub fn sample(&self, (lo, hi): (f64, f64), samples: usize) -> Vec<Point2> {
        let samples = samples.max(2);
        if self.n.y == 0.0 {
            if self.n.x == 0.0 {
                return Vec::new();
            }
            let x1 = self.limit / self.n.x;
            return vec![Point2::new(x1, lo), Point2::new(x1, hi)];
        }
        let step = (hi - lo) / (samples - 1) as f64;
        (0..samples)
            .map(|k| {
                let x1 = lo + step * k as f64;
                Point2::new(x1, (self.limit - self.n.x * x1) / self.n.y)
            })
            .collect()
    }
}

/// Ordered constraint list; `x1 >= 0`, `x2 >= 0` are implicit and never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSet {
    pub constraints: Vec<Constraint>,
}

impl ConstraintSet {
    #[inline]
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// Every unordered pair `(i, j)` with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (&Constraint, &Constraint)> + '_ {
        let cs = &self.constraints;
        (0..cs.len()).flat_map(move |i| ((i + 1)..cs.len()).map(move |j| (&cs[i], &cs[j])))
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;
    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
