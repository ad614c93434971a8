//! Tabular export of region vertices through polars.

use anyhow::{Context, Result};
use lpviz::geom2::Point2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One row per vertex, in boundary order: `vertex, x1, x2`.
pub fn vertex_frame(vertices: &[Point2]) -> Result<DataFrame> {
    let idx: Vec<u32> = (0..vertices.len() as u32).collect();
    let x1: Vec<f64> = vertices.iter().map(|p| p.x).collect();
    let x2: Vec<f64> = vertices.iter().map(|p| p.y).collect();
    Ok(df!("vertex" => idx, "x1" => x1, "x2" => x2)?)
}

pub fn write_vertices_csv(path: &Path, vertices: &[Point2]) -> Result<()> {
    let mut df = vertex_frame(vertices)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "region_csv_written");
    Ok(())
}
