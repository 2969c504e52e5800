use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;
use std::path::Path;

use tco_advisor::{
    calculator,
    models::vehicle::{DrivingProfile, FuelEconomy, PriceSheet},
    validation,
};

/// An offline comparison scenario: the consumption table is supplied in
/// the file instead of being fetched from the provider.
#[derive(Debug, Deserialize)]
struct Scenario {
    profile: DrivingProfile,
    prices: PriceSheet,
    horizon_years: u32,
    vehicles: Vec<FuelEconomy>,
}

/// Execute the compare command: run the pure core against a scenario file
pub fn execute(scenario_path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(scenario_path)
        .with_context(|| format!("Failed to read scenario file {}", scenario_path.display()))?;
    let scenario: Scenario = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario file {}", scenario_path.display()))?;

    validation::validate_compare(&scenario.profile, &scenario.prices, scenario.horizon_years)?;

    let split = calculator::annual_distance_split(&scenario.profile);
    let results = calculator::compute_costs(
        &scenario.profile,
        &scenario.vehicles,
        &scenario.prices,
        scenario.horizon_years,
    );

    println!(
        "{}",
        format!(
            "Annual distance: {:.0} km ({:.0} city / {:.0} highway), horizon {} years",
            split.total(),
            split.city_km,
            split.highway_km,
            scenario.horizon_years
        )
        .bold()
    );
    println!();

    for (rank, result) in results.iter().enumerate() {
        let line = format!(
            "{:2}. {:<18} total {:>10.0}  annual {:>8.0}  purchase {:>9.0}  {}",
            rank + 1,
            result.name,
            result.total_cost,
            result.annual_cost,
            result.purchase_price,
            match result.amortization_years {
                Some(years) => format!("pays back in {:.1} y", years),
                None => "no payback".to_string(),
            }
        );

        if rank == 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
