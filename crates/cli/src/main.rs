use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lpviz::geom2::{FeasibleRegion, GeomCfg};
use lpviz::lp::MicroLpSolver;
use lpviz::scene::{Scene, SceneCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "lpviz")]
#[command(about = "Solve and draw small linear programs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a production problem and print the plan with resource usage
    Solve {
        /// Problem JSON (`profit` + `resources`); the electronics demo when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the ordered feasible-region vertices as CSV
    Region {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a renderer-ready scene (region, lines, iso-profit lines, optimum) as JSON
    Scene {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 400)]
        samples: usize,
        #[arg(long, default_value_t = 4)]
        iso_count: usize,
    },
    /// Solve a transportation problem and print the shipping plan
    Transport {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, json } => solve(input.as_deref(), json),
        Action::Region { input, out } => region(input.as_deref(), &out),
        Action::Scene {
            input,
            out,
            samples,
            iso_count,
        } => scene(input.as_deref(), &out, samples, iso_count),
        Action::Transport { input } => transport(input.as_deref()),
        Action::Report => report(),
    }
}

fn solve(input: Option<&Path>, json: bool) -> Result<()> {
    let problem = input::production(input)?;
    let geom = GeomCfg::default();
    let solution = problem.solve(MicroLpSolver)?;
    let region = problem.region(geom);

    if json {
        let usage = solution
            .objective
            .map(|_| problem.resource_usage(lpviz::Vec2::new(solution.x[0], solution.x[1])));
        let out = serde_json::json!({
            "status": solution.status,
            "message": solution.message(),
            "x": solution.x,
            "objective": solution.objective,
            "resource_usage": usage,
            "region": region.vertices().iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("status: {}", solution.message());
    if let Some(objective) = solution.objective {
        let x = lpviz::Vec2::new(solution.x[0], solution.x[1]);
        println!("{} = {:.4}", problem.products[0], x.x);
        println!("{} = {:.4}", problem.products[1], x.y);
        println!("profit = {:.2}", objective);
        for u in problem.resource_usage(x) {
            match u.percent {
                Some(pct) => println!("  {}: {:.2} / {:.2} ({:.1}%)", u.name, u.used, u.total, pct),
                None => println!("  {}: {:.2} / {:.2}", u.name, u.used, u.total),
            }
        }
    }
    print_region(&region);
    Ok(())
}

fn print_region(region: &FeasibleRegion) {
    match region {
        FeasibleRegion::Empty => println!("feasible region: empty"),
        FeasibleRegion::Unbounded { direction, .. } => println!(
            "feasible region: unbounded along ({:.4}, {:.4})",
            direction.x, direction.y
        ),
        FeasibleRegion::Degenerate(_) => println!("feasible region: degenerate"),
        FeasibleRegion::Polygon(_) => println!("feasible region:"),
    }
    for p in region.vertices() {
        println!("  ({:.4}, {:.4})", p.x, p.y);
    }
}

fn region(input: Option<&Path>, out: &Path) -> Result<()> {
    let problem = input::production(input)?;
    let region = problem.region(GeomCfg::default());
    if region.is_empty() {
        tracing::warn!("feasible region is empty; writing header only");
    }
    provenance::ensure_parent(out)?;
    table::write_vertices_csv(out, region.vertices())?;
    let prov = provenance::write_sidecar(
        out,
        provenance::Payload::new(
            "region",
            input,
            serde_json::json!({ "bounded": region.is_bounded(), "vertices": region.vertices().len() }),
        ),
    )?;
    tracing::info!(provenance = %prov.display(), "region done");
    Ok(())
}

fn scene(input: Option<&Path>, out: &Path, samples: usize, iso_count: usize) -> Result<()> {
    if samples < 2 {
        bail!("--samples must be at least 2, got {samples}");
    }
    let problem = input::production(input)?;
    let geom = GeomCfg::default();
    let cfg = SceneCfg {
        samples,
        iso_count,
        ..SceneCfg::default()
    };
    let solution = problem.solve(MicroLpSolver)?;
    let region = problem.region(geom);
    let scene = Scene::build(&problem, &region, &solution, cfg, geom);

    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&scene)?)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(
            "scene",
            input,
            serde_json::json!({ "samples": samples, "iso_count": iso_count, "margin": cfg.margin }),
        ),
    )?;
    tracing::info!(out = %out.display(), status = solution.message(), "scene written");
    Ok(())
}

fn transport(input: Option<&Path>) -> Result<()> {
    let problem = input::transport(input)?;
    let plan = problem.solve(MicroLpSolver, GeomCfg::default().eps_feas)?;
    println!("status: {:?}", plan.status);
    for f in &plan.flows {
        println!(
            "  {} -> {}: {:.2} @ {:.2}",
            f.from, f.to, f.amount, f.unit_cost
        );
    }
    if let Some(total) = plan.total_cost {
        println!("total cost = {:.2}", total);
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lpviz_version": lpviz::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
