//! Tab-separated export of a k_3 sweep
//!
//! Writes the three data files the plotting pipeline consumes:
//! `3p-scores.tsv`, `3p-prizes.tsv` and `3p-revenue.tsv`, each with a
//! header row and one line per sweep point.

use anyhow::{Context, Result};
use contest_logic::SweepPoint;
use std::fs;
use std::path::Path;

const SCORES_FILE: &str = "3p-scores.tsv";
const PRIZES_FILE: &str = "3p-prizes.tsv";
const REVENUE_FILE: &str = "3p-revenue.tsv";

/// Write all three sweep files into `dir`, creating it if needed.
pub fn write_sweep(dir: &Path, points: &[SweepPoint]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    write_table(dir, SCORES_FILE, "k\ts1\ts2\ts3", points, |p| {
        p.solution.scores.to_vec()
    })?;
    write_table(dir, PRIZES_FILE, "k\tp1\tp2\tp3", points, |p| {
        p.solution.prizes.to_vec()
    })?;
    write_table(dir, REVENUE_FILE, "k\tR", points, |p| {
        vec![p.solution.revenue]
    })?;
    Ok(())
}

fn write_table(
    dir: &Path,
    name: &str,
    header: &str,
    points: &[SweepPoint],
    columns: impl Fn(&SweepPoint) -> Vec<f64>,
) -> Result<()> {
    let mut body = String::with_capacity(points.len() * 32);
    body.push_str(header);
    body.push('\n');
    for p in points {
        body.push_str(&p.k3.to_string());
        for v in columns(p) {
            body.push_str(&format!("\t{}", v));
        }
        body.push('\n');
    }

    let path = dir.join(name);
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} rows)", path.display(), points.len());
    Ok(())
}
