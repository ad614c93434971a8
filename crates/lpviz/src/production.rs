//! Two-product profit maximization under resource capacities.
//!
//! JSON layout (key order is significant and preserved):
//!
//! ```json
//! {
//!   "profit": { "smartphone": 8000, "tablet": 12000 },
//!   "resources": {
//!     "processor_time": { "smartphone": 2, "tablet": 3, "total": 240 },
//!     "ram":            { "smartphone": 4, "tablet": 6, "total": 480 },
//!     "batteries":      { "smartphone": 1, "tablet": 2, "total": 150 }
//!   }
//! }
//! ```
//!
//! The first `profit` key is decision variable x1, the second x2.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom2::{build_feasible_region, Constraint, ConstraintSet, FeasibleRegion, GeomCfg, Point2};
use crate::lp::{LpSolution, LpSolver, Sense, StandardFormLp};

/// One capacity: `rates[0]·x1 + rates[1]·x2 <= total`.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub name: String,
    pub rates: [f64; 2],
    pub total: f64,
}

/// Product mix problem: maximize `profit·x` subject to every resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem", into = "RawProblem")]
pub struct ProductionProblem {
    pub products: [String; 2],
    pub profit: [f64; 2],
    pub resources: Vec<Resource>,
}

/// Consumption of one resource at a production plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceUsage {
    pub name: String,
    pub used: f64,
    pub total: f64,
    /// `used / total` in percent; `None` for a zero total.
    pub percent: Option<f64>,
}

impl ResourceUsage {
    #[inline]
    pub fn is_binding(&self, eps: f64) -> bool {
        (self.total - self.used).abs() <= eps
    }
}

impl ProductionProblem {
    /// Smartphone/tablet instance with processor time, RAM and battery limits.
    pub fn electronics_demo() -> Self {
        Self {
            products: ["smartphone".into(), "tablet".into()],
            profit: [8000.0, 12000.0],
            resources: vec![
                Resource {
                    name: "processor_time".into(),
                    rates: [2.0, 3.0],
                    total: 240.0,
                },
                Resource {
                    name: "ram".into(),
                    rates: [4.0, 6.0],
                    total: 480.0,
                },
                Resource {
                    name: "batteries".into(),
                    rates: [1.0, 2.0],
                    total: 150.0,
                },
            ],
        }
    }

    /// Resource capacities as labeled constraints (same order as `resources`).
    pub fn constraint_set(&self) -> ConstraintSet {
        self.resources
            .iter()
            .map(|r| Constraint::new(r.rates[0], r.rates[1], r.total).labeled(r.name.clone()))
            .collect()
    }

    /// `max profit·x  s.t.  rates·x <= total,  x >= 0`.
    pub fn to_lp(&self) -> StandardFormLp {
        let mut lp = StandardFormLp::new(Sense::Maximize, 2);
        lp.c = self.profit.to_vec();
        for r in &self.resources {
            lp.push_le(r.rates.to_vec(), r.total);
        }
        lp
    }

    pub fn solve<S: LpSolver>(&self, solver: S) -> Result<LpSolution> {
        let sol = solver.solve(&self.to_lp())?;
        tracing::info!(status = ?sol.status, objective = ?sol.objective, "production solve");
        Ok(sol)
    }

    /// Feasible region of the capacities (x1, x2 >= 0 implied).
    pub fn region(&self, cfg: GeomCfg) -> FeasibleRegion {
        build_feasible_region(&self.constraint_set(), cfg)
    }

    #[inline]
    pub fn profit_at(&self, x: Point2) -> f64 {
        self.profit[0] * x.x + self.profit[1] * x.y
    }

    /// Per-resource consumption at plan `x`.
    pub fn resource_usage(&self, x: Point2) -> Vec<ResourceUsage> {
        self.resources
            .iter()
            .map(|r| {
                let used = r.rates[0] * x.x + r.rates[1] * x.y;
                ResourceUsage {
                    name: r.name.clone(),
                    used,
                    total: r.total,
                    percent: (r.total != 0.0).then(|| used / r.total * 100.0),
                }
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize)]
struct RawProblem {
    profit: IndexMap<String, f64>,
    resources: IndexMap<String, IndexMap<String, f64>>,
}

impl TryFrom<RawProblem> for ProductionProblem {
    type Error = Error;

    fn try_from(raw: RawProblem) -> Result<Self> {
        let n = raw.profit.len();
        let mut profit = raw.profit.into_iter();
        let ((p1, c1), (p2, c2)) = match (profit.next(), profit.next(), profit.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => {
                return Err(Error::InvalidProblem(format!(
                    "profit must list exactly 2 products, got {n}"
                )))
            }
        };
        let mut resources = Vec::with_capacity(raw.resources.len());
        for (name, fields) in raw.resources {
            let field = |key: &str| {
                fields.get(key).copied().ok_or_else(|| {
                    Error::InvalidProblem(format!("resource {name:?} is missing {key:?}"))
                })
            };
            resources.push(Resource {
                rates: [field(p1.as_str())?, field(p2.as_str())?],
                total: field("total")?,
                name,
            });
        }
        Ok(Self {
            products: [p1, p2],
            profit: [c1, c2],
            resources,
        })
    }
}

impl From<ProductionProblem> for RawProblem {
    fn from(p: ProductionProblem) -> Self {
        let [p1, p2] = p.products;
        let resources = p
            .resources
            .into_iter()
            .map(|r| {
                let fields = IndexMap::from([
                    (p1.clone(), r.rates[0]),
                    (p2.clone(), r.rates[1]),
                    ("total".to_string(), r.total),
                ]);
                (r.name, fields)
            })
            .collect();
        RawProblem {
            profit: IndexMap::from([(p1, p.profit[0]), (p2, p.profit[1])]),
            resources,
        }
    }
}
