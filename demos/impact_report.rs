//! Print the impact outcome for one body, before and after deflection.
//!
//! Arguments are diameter (m), velocity (km/s) and velocity change (km/s);
//! all are optional and default to a 150 m body at 15.2 km/s.
//!
//! Run with: cargo run --example impact_report -- 150 15.2 -2
//! Set RUST_LOG=debug to see the engine's log events.

use neo_impact::impact::{ImpactOutcome, ImpactRequest};
use neo_impact::{EngineConfig, EngineError};
use tracing_subscriber::EnvFilter;

fn arg(args: &[String], index: usize, default: f64) -> Option<f64> {
    match args.get(index) {
        Some(raw) => raw.parse().ok(),
        None => Some(default),
    }
}

fn print_outcome(label: &str, outcome: &ImpactOutcome) {
    let env = &outcome.environmental_effects;
    let risk = &outcome.risk_assessment;

    println!("=== {label} ===");
    println!("  Velocity:          {:.2} km/s", outcome.adjusted_velocity);
    println!("  Mass:              {:.3e} kg", outcome.mass);
    println!("  Energy:            {:.3e} J", outcome.energy);
    println!("  TNT equivalent:    {:.3} Mt", outcome.tnt_equivalent / 1e6);
    println!(
        "  Crater:            {:.0} m (transient {:.0} m)",
        outcome.crater, outcome.transient_crater
    );
    println!("  Seismic magnitude: {:.2}", outcome.seismic_magnitude);
    println!("  Tsunami height:    {:.1} m", outcome.tsunami_height);
    println!(
        "  Airburst altitude: {:.0} m, fireball radius {:.0} m",
        outcome.atmospheric_effects.airburst_altitude, outcome.atmospheric_effects.fireball_radius
    );
    println!(
        "  Impact type:       {:?} (affected radius {:.0} m)",
        env.impact_type, env.affected_radius
    );
    println!(
        "  Risk:              {:?} (score {:.3})",
        risk.risk_level, risk.risk_score
    );
    println!(
        "  Impact shift:      {:+.2}° lat, {:+.2}° lng",
        outcome.impact_shift_lat, outcome.impact_shift_lng
    );
    println!();
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let request = ImpactRequest {
        diameter: arg(&args, 1, 150.0),
        velocity: arg(&args, 2, 15.2),
        velocity_change: arg(&args, 3, -2.0),
        ..Default::default()
    };
    let config = EngineConfig::default();

    let undeflected = ImpactRequest {
        velocity_change: None,
        ..request.clone()
    }
    .evaluate(&config)?;
    let deflected = request.evaluate(&config)?;

    print_outcome("Undeflected", &undeflected);
    print_outcome("Deflected", &deflected);

    let json = serde_json::to_string_pretty(&deflected)?;
    println!("{json}");
    Ok(())
}
