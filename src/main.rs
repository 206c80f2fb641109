//! Engineering-economics demo CLI
//!
//! Evaluates a small built-in batch of sample projects with all three
//! metrics and prints the comparison tables.

use econ_engine::{EvaluationService, Method, Project, ServiceConfig};

fn main() {
    env_logger::init();

    println!("Engineering Economics Engine v0.1.0");
    println!("===================================\n");

    let projects = vec![
        Project::new("Plant A", 1000.0, 0.0, 5, 400.0, 100.0, 0.0, 10.0),
        Project::new("Plant B", 2500.0, 500.0, 10, 800.0, 250.0, 25.0, 8.0),
        Project::new("Retrofit", 750.0, 100.0, 6, 300.0, 120.0, 15.0, 12.0),
    ];

    println!("Projects:");
    for p in &projects {
        println!(
            "  {:<10} IC=${:<9.2} SV=${:<8.2} n={:<3} I=${:<8.2} M=${:<8.2} T={:>5.1}% i={:>5.1}%",
            p.name,
            p.initial_cost,
            p.salvage_value,
            p.life,
            p.annual_income,
            p.annual_maintenance,
            p.tax_rate,
            p.interest_rate,
        );
    }

    let service = EvaluationService::new(ServiceConfig::default());

    for method in [Method::Npw, Method::BcRatio, Method::Irr] {
        println!("\nComparison by {}:", method.as_str());
        println!("{:<12} {:>12} {:>18}", "Project", method.as_str(), "Status");
        println!("{}", "-".repeat(44));

        for result in service.evaluate(&projects, method) {
            match result.display_value() {
                Some(value) => println!(
                    "{:<12} {:>12.2} {:>18}",
                    result.project,
                    value,
                    result.status.as_str()
                ),
                None => println!(
                    "{:<12} {:>12} {:>18}",
                    result.project,
                    "-",
                    result.status.as_str()
                ),
            }
        }
    }
}
