//! Compare deflection strategies against one asteroid.
//!
//! Runs all four strategies with fixed actuator parameters, then the
//! three-way comparison with the default presets.
//!
//! Run with: cargo run --example compare_strategies -- 186 3650
//! (diameter in m, warning time in days)

use neo_impact::impact::stony_mass;
use neo_impact::mitigation::{
    ComparisonRequest, DeflectionOutcome, GravityTractorRequest, KineticImpactorRequest,
    LaserAblationRequest, NuclearDeflectionRequest,
};
use neo_impact::{EngineConfig, EngineError};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TARGET_VELOCITY_KM_S: f64 = 20.0;

fn print_outcome(outcome: &DeflectionOutcome) {
    let results = &outcome.results;
    let mission = &outcome.mission_requirements;
    println!(
        "{:<20} Δv {:>12.4e} m/s  deflection {:>12.4e} m  effectiveness {:>10.3e}  success {:>5.1}%",
        outcome.strategy.name(),
        results.velocity_change,
        results.deflection_distance,
        results.effectiveness,
        results.success_probability * 100.0
    );
    println!(
        "{:<20} launch by day {:.0}, mission mass {:.0} kg",
        "", mission.launch_window, mission.total_mission_mass
    );
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let diameter: f64 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(186.0);
    let days: f64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(3650.0);
    let target_mass = stony_mass(diameter);

    info!(diameter, target_mass, days, "comparing deflection strategies");

    println!("=== Individual strategies ===");
    let outcomes = [
        KineticImpactorRequest::new(target_mass, TARGET_VELOCITY_KM_S, 600.0, 6.1, days)
            .evaluate()?,
        GravityTractorRequest::new(target_mass, 20_000.0, 200.0, days).evaluate()?,
        LaserAblationRequest::new(target_mass, 1000.0, days).evaluate()?,
        NuclearDeflectionRequest::new(target_mass, TARGET_VELOCITY_KM_S, 1.0, days).evaluate()?,
    ];
    for outcome in &outcomes {
        print_outcome(outcome);
    }

    println!();
    println!("=== Comparison (default presets) ===");
    let comparison = ComparisonRequest::new(target_mass, TARGET_VELOCITY_KM_S, days)
        .with_asteroid_diameter(diameter)
        .evaluate(&EngineConfig::default())?;

    for row in &comparison.comparison {
        println!(
            "{:<20} effectiveness {:>10.3e}  cost ${:>10.3e}  {:>5.0} days  TRL {}  risk {:?}",
            row.name, row.effectiveness, row.cost, row.time_required, row.technology_readiness, row.risk
        );
    }
    println!();
    println!("Recommendation:      {}", comparison.recommendation.name);
    println!("Most cost-effective: {}", comparison.summary.most_cost_effective.name);
    println!("Lowest risk:         {}", comparison.summary.lowest_risk.name);
    Ok(())
}
