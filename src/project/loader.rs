//! Load project records from CSV or JSON intake files

use super::Project;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the intake column names
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialCost")]
    initial_cost: f64,
    #[serde(rename = "SalvageValue")]
    salvage_value: f64,
    #[serde(rename = "Life")]
    life: u32,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "AnnualMaintenance")]
    annual_maintenance: f64,
    #[serde(rename = "TaxRate")]
    tax_rate: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
}

impl CsvRow {
    fn into_project(self) -> Project {
        Project {
            name: self.name,
            initial_cost: self.initial_cost,
            salvage_value: self.salvage_value,
            life: self.life,
            annual_income: self.annual_income,
            annual_maintenance: self.annual_maintenance,
            tax_rate: self.tax_rate,
            interest_rate: self.interest_rate,
        }
    }
}

/// Load all projects from a CSV file
pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<Project>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut projects = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        projects.push(row.into_project());
    }

    Ok(projects)
}

/// Load projects from any reader (e.g., string buffer, network stream)
pub fn load_projects_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Project>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut projects = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        projects.push(row.into_project());
    }

    Ok(projects)
}

/// Load projects from a JSON array file
pub fn load_projects_json<P: AsRef<Path>>(path: P) -> Result<Vec<Project>, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    let projects: Vec<Project> = serde_json::from_reader(file)?;
    Ok(projects)
}
