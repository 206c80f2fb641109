//! Compare capital projects loaded from a CSV file
//!
//! Evaluates every project with the chosen metric and prints a comparison
//! table. Supports JSON output for API integration via --json, and an
//! optional CSV results file.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use econ_engine::{
    project::load_projects, EvaluationResult, EvaluationService, Method, ServiceConfig,
};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "compare_projects",
    about = "Evaluate and compare capital projects by NPW, B/C ratio, or IRR"
)]
struct Args {
    /// CSV file of project records
    /// (Name,InitialCost,SalvageValue,Life,AnnualIncome,AnnualMaintenance,TaxRate,InterestRate)
    input: PathBuf,

    /// Metric to evaluate
    #[arg(long, value_enum, default_value = "npw")]
    method: Method,

    /// Global discount-rate override in percent (NPW and B/C only;
    /// each project's own interest rate is used when omitted)
    #[arg(long)]
    rate: Option<f64>,

    /// Emit results as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write results to a CSV file in addition to stdout
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Evaluate sequentially instead of across the rayon thread pool
    #[arg(long)]
    sequential: bool,
}

#[derive(Serialize)]
struct ComparisonResponse {
    method: Method,
    rate_override_pct: Option<f64>,
    project_count: usize,
    results: Vec<EvaluationResult>,
    execution_time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let projects = load_projects(&args.input)
        .map_err(|e| anyhow!("failed to load projects from {}: {}", args.input.display(), e))?;

    if projects.is_empty() {
        return Err(anyhow!("no projects found in {}", args.input.display()));
    }

    let service = EvaluationService::new(ServiceConfig {
        rate_override: args.rate,
        parallel: !args.sequential,
        ..ServiceConfig::default()
    });

    let results = service.evaluate(&projects, args.method);
    let execution_time_ms = start.elapsed().as_millis() as u64;

    if let Some(path) = &args.csv {
        write_results_csv(path, &results)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if args.json {
        let response = ComparisonResponse {
            method: args.method,
            rate_override_pct: args.rate,
            project_count: projects.len(),
            results,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Loaded {} projects from {}", projects.len(), args.input.display());
        if let Some(rate) = args.rate {
            println!("Discount-rate override: {:.2}%", rate);
        }

        println!("\nComparison by {}:", args.method.as_str());
        println!("{:<20} {:>14} {:>20}", "Project", args.method.as_str(), "Status");
        println!("{}", "-".repeat(56));

        for result in &results {
            match result.display_value() {
                Some(value) => println!(
                    "{:<20} {:>14.2} {:>20}",
                    result.project,
                    value,
                    result.status.as_str()
                ),
                None => println!(
                    "{:<20} {:>14} {:>20}",
                    result.project,
                    "-",
                    result.status.as_str()
                ),
            }
        }

        let failures = results.iter().filter(|r| !r.status.has_value()).count();
        if failures > 0 {
            println!("\n{} project(s) could not be evaluated; see statuses above.", failures);
        }

        println!("\nTotal time: {:?}", start.elapsed());
    }

    Ok(())
}

/// Write results as CSV for spreadsheet comparison
fn write_results_csv(path: &PathBuf, results: &[EvaluationResult]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Project,Method,Value,Status")?;

    for result in results {
        match result.display_value() {
            Some(value) => writeln!(
                file,
                "{},{},{:.2},{}",
                result.project,
                result.method.as_str(),
                value,
                result.status.as_str()
            )?,
            None => writeln!(
                file,
                "{},{},,{}",
                result.project,
                result.method.as_str(),
                result.status.as_str()
            )?,
        }
    }

    Ok(())
}
