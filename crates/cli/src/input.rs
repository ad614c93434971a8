//! Problem loading: JSON files, or the built-in demo instances when no path is given.

use anyhow::{Context, Result};
use lpviz::production::ProductionProblem;
use lpviz::transport::TransportProblem;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn production(path: Option<&Path>) -> Result<ProductionProblem> {
    match path {
        Some(p) => read_json(p),
        None => {
            tracing::info!("no --input given; using the electronics demo instance");
            Ok(ProductionProblem::electronics_demo())
        }
    }
}

pub fn transport(path: Option<&Path>) -> Result<TransportProblem> {
    match path {
        Some(p) => read_json(p),
        None => {
            tracing::info!("no --input given; using the supply demo instance");
            Ok(TransportProblem::supply_demo())
        }
    }
}
