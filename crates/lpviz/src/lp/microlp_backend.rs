//! `LpSolver` backed by the `microlp` simplex implementation.

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use super::{LpSolution, LpSolver, LpStatus, Sense, StandardFormLp};
use crate::error::{Error, Result};

/// Default solver backend. Stateless; a fresh `microlp::Problem` is built per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MicroLpSolver;

impl LpSolver for MicroLpSolver {
    fn solve(&self, lp: &StandardFormLp) -> Result<LpSolution> {
        lp.validate()?;
        let direction = match lp.sense {
            Sense::Minimize => OptimizationDirection::Minimize,
            Sense::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);
        let vars: Vec<Variable> = lp
            .c
            .iter()
            .zip(&lp.bounds)
            .map(|(&c, &bounds)| problem.add_var(c, bounds))
            .collect();
        for (row, &rhs) in lp.a_ub.iter().zip(&lp.b_ub) {
            problem.add_constraint(terms(&vars, row), ComparisonOp::Le, rhs);
        }
        for (row, &rhs) in lp.a_eq.iter().zip(&lp.b_eq) {
            problem.add_constraint(terms(&vars, row), ComparisonOp::Eq, rhs);
        }
        tracing::debug!(
            vars = vars.len(),
            ub_rows = lp.a_ub.len(),
            eq_rows = lp.a_eq.len(),
            "microlp solve"
        );
        match problem.solve() {
            Ok(sol) => {
                let x: Vec<f64> = vars.iter().map(|&v| *sol.var_value(v)).collect();
                Ok(LpSolution::optimal(x, sol.objective()))
            }
            Err(microlp::Error::Infeasible) => Ok(LpSolution::without_optimum(LpStatus::Infeasible)),
            Err(microlp::Error::Unbounded) => Ok(LpSolution::without_optimum(LpStatus::Unbounded)),
            Err(e) => Err(Error::Solver(e.to_string())),
        }
    }
}

/// Non-zero `(var, coeff)` terms of a dense row.
fn terms(vars: &[Variable], row: &[f64]) -> Vec<(Variable, f64)> {
    vars.iter()
        .zip(row)
        .filter(|(_, a)| **a != 0.0)
        .map(|(&v, &a)| (v, a))
        .collect()
}
