//! Crate error type.
//!
//! Geometric "no result" outcomes (parallel lines, empty regions) are not
//! errors; they travel as `Option` or `FeasibleRegion` variants.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// `value_at` on a line that only bounds x1 (`coeff_x2 = 0`).
    #[error("constraint {label:?} has zero x2 coefficient; x2 is not a function of x1")]
    DivisionByZero { label: Option<String> },

    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    #[error("solver failure: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
