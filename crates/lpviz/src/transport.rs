//! Cost-minimizing transportation from supply nodes to demand nodes.
//!
//! Variables `x[i][j]` (flow from source i to sink j), flattened row-major.
//! Each source ships at most its supply; each sink receives exactly its demand.
//! No geometry: more than two variables, so this only goes through the solver.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lp::{LpSolver, LpStatus, Sense, StandardFormLp};

/// A named node with a quantity (supply capacity or demand requirement).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportProblem {
    pub sources: Vec<Node>,
    pub sinks: Vec<Node>,
    /// `cost[i][j]`: unit cost from source i to sink j.
    pub cost: Vec<Vec<f64>>,
}

/// One shipped lane of an optimal plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Flow {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub unit_cost: f64,
}

/// Solved plan: non-zero lanes and the total cost.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportPlan {
    pub status: LpStatus,
    pub flows: Vec<Flow>,
    pub total_cost: Option<f64>,
}

impl TransportProblem {
    /// Two warehouses supplying three bases.
    pub fn supply_demo() -> Self {
        let node = |name: &str, amount: f64| Node {
            name: name.into(),
            amount,
        };
        Self {
            sources: vec![node("warehouse_1", 150.0), node("warehouse_2", 250.0)],
            sinks: vec![node("alpha", 120.0), node("beta", 180.0), node("gamma", 100.0)],
            cost: vec![vec![8.0, 6.0, 10.0], vec![9.0, 7.0, 5.0]],
        }
    }

    #[inline]
    fn var(&self, i: usize, j: usize) -> usize {
        i * self.sinks.len() + j
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() || self.sinks.is_empty() {
            return Err(Error::InvalidProblem("need at least one source and one sink".into()));
        }
        if self.cost.len() != self.sources.len()
            || self.cost.iter().any(|row| row.len() != self.sinks.len())
        {
            return Err(Error::InvalidProblem(format!(
                "cost matrix must be {}x{}",
                self.sources.len(),
                self.sinks.len()
            )));
        }
        Ok(())
    }

    /// `min Σ cost·x  s.t.  Σ_j x_ij <= supply_i,  Σ_i x_ij = demand_j,  x >= 0`.
    pub fn to_lp(&self) -> Result<StandardFormLp> {
        self.validate()?;
        let (m, n) = (self.sources.len(), self.sinks.len());
        let mut lp = StandardFormLp::new(Sense::Minimize, m * n);
        lp.c = self.cost.iter().flatten().copied().collect();
        for (i, src) in self.sources.iter().enumerate() {
            let mut row = vec![0.0; m * n];
            for j in 0..n {
                row[self.var(i, j)] = 1.0;
            }
            lp.push_le(row, src.amount);
        }
        for (j, sink) in self.sinks.iter().enumerate() {
            let mut row = vec![0.0; m * n];
            for i in 0..m {
                row[self.var(i, j)] = 1.0;
            }
            lp.push_eq(row, sink.amount);
        }
        Ok(lp)
    }

    /// Solve and keep the lanes carrying more than `eps`.
    pub fn solve<S: LpSolver>(&self, solver: S, eps: f64) -> Result<TransportPlan> {
        let sol = solver.solve(&self.to_lp()?)?;
        tracing::info!(status = ?sol.status, cost = ?sol.objective, "transport solve");
        let mut flows = Vec::new();
        if sol.is_success() {
            for (i, src) in self.sources.iter().enumerate() {
                for (j, sink) in self.sinks.iter().enumerate() {
                    let amount = sol.x[self.var(i, j)];
                    if amount > eps {
                        flows.push(Flow {
                            from: src.name.clone(),
                            to: sink.name.clone(),
                            amount,
                            unit_cost: self.cost[i][j],
                        });
                    }
                }
            }
        }
        Ok(TransportPlan {
            status: sol.status,
            flows,
            total_cost: sol.objective,
        })
    }
}
