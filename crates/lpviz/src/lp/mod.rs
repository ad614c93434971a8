//! Standard-form linear programs and the solver seam.
//!
//! The crate never optimizes by itself: formulations build a `StandardFormLp`,
//! an `LpSolver` turns it into an `LpSolution`. `MicroLpSolver` is the default
//! backend (pure-Rust simplex from `microlp`).
//!
//! Conventions
//! - Infeasible / unbounded instances are regular outcomes (`LpStatus`), not `Err`.
//! - `Err` is reserved for malformed input and internal solver failures.

mod microlp_backend;

pub use microlp_backend::MicroLpSolver;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Optimization direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sense {
    Minimize,
    Maximize,
}

/// `opt c·x  s.t.  A_ub x <= b_ub,  A_eq x = b_eq,  lo <= x <= hi`.
///
/// Rows are dense; problems here have a handful of variables.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardFormLp {
    pub sense: Sense,
    pub c: Vec<f64>,
    pub a_ub: Vec<Vec<f64>>,
    pub b_ub: Vec<f64>,
    pub a_eq: Vec<Vec<f64>>,
    pub b_eq: Vec<f64>,
    /// Per-variable `(lo, hi)`; use `f64::INFINITY` for no upper bound.
    pub bounds: Vec<(f64, f64)>,
}

impl StandardFormLp {
    /// Empty LP over `n` non-negative variables with a zero objective.
    pub fn new(sense: Sense, n: usize) -> Self {
        Self {
            sense,
            c: vec![0.0; n],
            a_ub: Vec::new(),
            b_ub: Vec::new(),
            a_eq: Vec::new(),
            b_eq: Vec::new(),
            bounds: vec![(0.0, f64::INFINITY); n],
        }
    }

    #[inline]
    pub fn num_vars(&self) -> usize {
        self.c.len()
    }

    pub fn push_le(&mut self, row: Vec<f64>, rhs: f64) {
        self.a_ub.push(row);
        self.b_ub.push(rhs);
    }

    pub fn push_eq(&mut self, row: Vec<f64>, rhs: f64) {
        self.a_eq.push(row);
        self.b_eq.push(rhs);
    }

    /// Objective value `c·x`.
    pub fn objective_at(&self, x: &[f64]) -> f64 {
        self.c.iter().zip(x).map(|(c, x)| c * x).sum()
    }

    /// Shape and finiteness checks; does not judge feasibility.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_vars();
        if n == 0 {
            return Err(Error::InvalidProblem("no decision variables".into()));
        }
        if self.bounds.len() != n {
            return Err(Error::InvalidProblem(format!(
                "{} bounds for {n} variables",
                self.bounds.len()
            )));
        }
        check_block("inequality", &self.a_ub, &self.b_ub, n)?;
        check_block("equality", &self.a_eq, &self.b_eq, n)?;
        if self.c.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidProblem("non-finite objective coefficient".into()));
        }
        for (k, &(lo, hi)) in self.bounds.iter().enumerate() {
            if lo.is_nan() || hi.is_nan() || lo > hi {
                return Err(Error::InvalidProblem(format!(
                    "variable {k} has bounds ({lo}, {hi})"
                )));
            }
        }
        Ok(())
    }
}

fn check_block(kind: &str, a: &[Vec<f64>], b: &[f64], n: usize) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::InvalidProblem(format!(
            "{} {kind} rows but {} right-hand sides",
            a.len(),
            b.len()
        )));
    }
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(Error::InvalidProblem(format!(
                "{kind} row {i} has {} coefficients, expected {n}",
                row.len()
            )));
        }
        if row.iter().chain(std::iter::once(&b[i])).any(|v| !v.is_finite()) {
            return Err(Error::InvalidProblem(format!(
                "{kind} row {i} has a non-finite entry"
            )));
        }
    }
    Ok(())
}

/// Solver outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LpStatus {
    Optimal,
    Infeasible,
    Unbounded,
}

/// Optimal point and value, or the reason there is none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LpSolution {
    pub status: LpStatus,
    /// Decision values; empty unless `status == Optimal`.
    pub x: Vec<f64>,
    /// Objective in the problem's own sense; `None` unless optimal.
    pub objective: Option<f64>,
}

impl LpSolution {
    pub fn optimal(x: Vec<f64>, objective: f64) -> Self {
        Self {
            status: LpStatus::Optimal,
            x,
            objective: Some(objective),
        }
    }

    pub fn without_optimum(status: LpStatus) -> Self {
        Self {
            status,
            x: Vec::new(),
            objective: None,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == LpStatus::Optimal
    }

    /// Human-readable status line.
    pub fn message(&self) -> &'static str {
        match self.status {
            LpStatus::Optimal => "Optimization terminated successfully",
            LpStatus::Infeasible => "The problem is infeasible",
            LpStatus::Unbounded => "The problem is unbounded",
        }
    }
}

/// Black-box LP solver.
pub trait LpSolver {
    fn solve(&self, lp: &StandardFormLp) -> Result<LpSolution>;
}

impl<S: LpSolver + ?Sized> LpSolver for &S {
    fn solve(&self, lp: &StandardFormLp) -> Result<LpSolution> {
        (**self).solve(lp)
    }
}
