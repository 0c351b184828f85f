//! Cutting planner CLI.
//!
//! Reads profile and order quantity tables, runs the allocation engine, and
//! writes the cutting maps as CSV and SVG under a timestamped run directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use u_cutstock_cli::{diagram, parser, report, report::CutReport};
use u_cutstock_core::{allocate, Length, PlanConfig};

#[derive(Parser)]
#[command(name = "cutstock")]
#[command(about = "Optimal 1-D cutting maps for linear stock profiles")]
#[command(version)]
struct Cli {
    /// Kerf width lost per cut, in the same unit as the input lengths
    #[arg(short, long, default_value_t = 0)]
    tolerance: Length,

    /// CSV file of available profiles (length,count)
    #[arg(short, long)]
    profiles: PathBuf,

    /// CSV file of requested cuts (length,count)
    #[arg(short, long)]
    order: PathBuf,

    /// Root directory for run output
    #[arg(short = 'O', long, default_value = "output")]
    output: PathBuf,

    /// Also save the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip SVG diagram rendering
    #[arg(long)]
    no_diagrams: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.tolerance == 0 {
        println!("Note: kerf width is 0, no cutting loss will be charged");
    }

    let mut profiles = parser::read_lengths(&cli.profiles)
        .with_context(|| format!("failed to read profiles from {}", cli.profiles.display()))?;
    if profiles.is_empty() {
        bail!("no profile data found in {}", cli.profiles.display());
    }

    let mut order = parser::read_lengths(&cli.order)
        .with_context(|| format!("failed to read order from {}", cli.order.display()))?;
    if order.is_empty() {
        bail!("no order data found in {}", cli.order.display());
    }

    profiles.sort_unstable_by(|a, b| b.cmp(a));
    order.sort_unstable_by(|a, b| b.cmp(a));
    let smallest: Length = profiles.iter().copied().min().unwrap_or(0);

    println!("Available profiles: {profiles:?}");
    println!("Smallest profile: {smallest}");
    println!("Requested cuts: {order:?}");
    println!("Kerf width: {}", cli.tolerance);

    let config = PlanConfig::new().with_tolerance(cli.tolerance);
    let result = allocate(&profiles, &order, &config);

    let cut_report = CutReport::new(&result, cli.tolerance);
    cut_report.print_summary();

    let run_dir = report::run_directory(&cli.output);

    let csv_dir = run_dir.join("csv");
    fs::create_dir_all(&csv_dir)
        .with_context(|| format!("failed to create {}", csv_dir.display()))?;
    let csv_path = csv_dir.join("output.csv");
    cut_report
        .save_csv(&csv_path)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    println!("CSV saved to: {}", csv_path.display());

    if !cli.no_diagrams {
        let svg_dir = run_dir.join("svg");
        fs::create_dir_all(&svg_dir)
            .with_context(|| format!("failed to create {}", svg_dir.display()))?;
        diagram::save_diagrams(&result.plans, cli.tolerance, &svg_dir)
            .with_context(|| format!("failed to write diagrams to {}", svg_dir.display()))?;
        println!("Diagrams saved to: {}", svg_dir.display());
    }

    if let Some(path) = cli.json {
        cut_report
            .save_json(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("JSON saved to: {}", path.display());
    }

    Ok(())
}
