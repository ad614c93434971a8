//! Renderer-ready description of a solved two-variable production problem.
//!
//! The region and the optimum come from one `ProductionProblem`: the polygon is
//! built by the geometry engine, the optimum is whatever the solver returned.
//! Nothing is re-declared, so the marker always sits on the drawn region.

use serde::Serialize;

use crate::geom2::{is_feasible, Constraint, FeasibleRegion, GeomCfg, Point2};
use crate::lp::{LpSolution, LpStatus};
use crate::production::ProductionProblem;

/// Sampling and framing options.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Points per sampled line.
    pub samples: usize,
    /// Number of iso-objective lines (the last one passes through the optimum).
    pub iso_count: usize,
    /// Spacing between iso levels as a fraction of the optimal objective.
    pub iso_step: f64,
    /// Axis window is the region's extent times this factor.
    pub margin: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            samples: 400,
            iso_count: 4,
            iso_step: 0.125,
            margin: 1.25,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Polygon,
    Degenerate,
    Unbounded,
    Empty,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IsoLine {
    pub level: f64,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimumMarker {
    pub x: [f64; 2],
    pub objective: f64,
    /// Whether the optimum passes the region's feasibility filter.
    pub inside_region: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// Axis labels (x1, x2).
    pub axes: [String; 2],
    /// Plot window `[x1_max, x2_max]`; both axes start at 0.
    pub window: [f64; 2],
    pub region_kind: RegionKind,
    /// Ordered vertices; for `Polygon` the last one connects back to the first.
    pub region: Vec<[f64; 2]>,
    pub constraint_lines: Vec<LineSeries>,
    pub iso_lines: Vec<IsoLine>,
    pub solver_status: LpStatus,
    pub optimum: Option<OptimumMarker>,
}

/// Evenly spaced objective levels ending at `optimum`.
pub fn iso_levels(optimum: f64, count: usize, step: f64) -> Vec<f64> {
    (0..count)
        .map(|k| optimum * (1.0 - step * (count - 1 - k) as f64))
        .collect()
}

fn pairs(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

impl Scene {
    /// Assemble a scene from one region and one solve of the same problem.
    pub fn build(
        problem: &ProductionProblem,
        region: &FeasibleRegion,
        solution: &LpSolution,
        cfg: SceneCfg,
        geom: GeomCfg,
    ) -> Self {
        let optimum = match (solution.is_success(), solution.objective) {
            (true, Some(objective)) if solution.x.len() == 2 => {
                let x = Point2::new(solution.x[0], solution.x[1]);
                let inside = is_feasible(x, &problem.constraint_set(), geom.eps_feas.max(1e-6));
                if !inside {
                    tracing::warn!(x1 = x.x, x2 = x.y, "solver optimum outside computed region");
                }
                Some((x, objective, inside))
            }
            _ => None,
        };

        let extent = region
            .vertices()
            .iter()
            .chain(optimum.as_ref().map(|(x, _, _)| x))
            .fold(Point2::zeros(), |acc, p| acc.sup(p));
        let window = [
            if extent.x > 0.0 { extent.x * cfg.margin } else { 1.0 },
            if extent.y > 0.0 { extent.y * cfg.margin } else { 1.0 },
        ];
        let range = (0.0, window[0]);

        let constraint_lines = problem
            .constraint_set()
            .iter()
            .map(|h| LineSeries {
                label: h.label.clone().unwrap_or_default(),
                points: pairs(&h.sample(range, cfg.samples)),
            })
            .collect();

        let iso_lines = match optimum {
            Some((_, objective, _)) => iso_levels(objective, cfg.iso_count, cfg.iso_step)
                .into_iter()
                .map(|level| {
                    let line = Constraint::new(problem.profit[0], problem.profit[1], level);
                    IsoLine {
                        level,
                        points: pairs(&line.sample(range, cfg.samples)),
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        let region_kind = match region {
            FeasibleRegion::Polygon(_) => RegionKind::Polygon,
            FeasibleRegion::Degenerate(_) => RegionKind::Degenerate,
            FeasibleRegion::Unbounded { .. } => RegionKind::Unbounded,
            FeasibleRegion::Empty => RegionKind::Empty,
        };

        Self {
            axes: problem.products.clone(),
            window,
            region_kind,
            region: pairs(region.vertices()),
            constraint_lines,
            iso_lines,
            solver_status: solution.status,
            optimum: optimum.map(|(x, objective, inside_region)| OptimumMarker {
                x: [x.x, x.y],
                objective,
                inside_region,
            }),
        }
    }
}
