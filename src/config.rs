//! Engine defaults.
//!
//! Everything the engine assumes when a request does not say otherwise
//! lives in [`EngineConfig`], so a front end can swap in its own scenario
//! assumptions from a JSON document without touching the formulas.

use serde::{Deserialize, Serialize};

use crate::error::{Domain, FieldCheck, Result};
use crate::types::{DAYS_PER_YEAR, STONY_DENSITY};

/// Representative actuator parameters used when comparing strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonPresets {
    /// Kinetic impactor mass as a fraction of the target mass.
    pub impactor_mass_fraction: f64,
    /// Kinetic impactor velocity (km/s).
    pub impactor_velocity: f64,
    /// Gravity tractor spacecraft mass (kg).
    pub tractor_mass: f64,
    /// Gravity tractor standoff distance (m).
    pub tractor_distance: f64,
    /// Laser power (kW).
    pub laser_power: f64,
    /// Cost per kg of kinetic impactor (USD).
    pub kinetic_cost_per_kg: f64,
    /// Cost per kg of gravity tractor (USD).
    pub tractor_cost_per_kg: f64,
    /// Cost per kW of laser (USD).
    pub laser_cost_per_kw: f64,
}

impl Default for ComparisonPresets {
    fn default() -> Self {
        Self {
            impactor_mass_fraction: 0.01,
            impactor_velocity: 10.0,
            tractor_mass: 1000.0,
            tractor_distance: 100.0,
            laser_power: 1000.0,
            kinetic_cost_per_kg: 1000.0,
            tractor_cost_per_kg: 5000.0,
            laser_cost_per_kw: 10_000.0,
        }
    }
}

/// Scenario assumptions for impact requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Bulk density used for mass estimates (kg/m³).
    pub density: f64,
    /// Impact probability fed into the risk score.
    pub impact_probability: f64,
    /// Warning time fed into the risk score (days).
    pub time_to_impact_days: f64,
    /// Whether the impact site is coastal unless a request says otherwise.
    pub coastal: bool,
    /// Distance from the coast used for tsunami attenuation (m).
    pub distance_from_coast: f64,
    /// Lifetime of cached asteroid records (seconds).
    pub neo_cache_ttl_secs: u64,
    pub comparison: ComparisonPresets,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            density: STONY_DENSITY,
            // Expected value of a uniform draw over [0, 0.1)
            impact_probability: 0.05,
            time_to_impact_days: DAYS_PER_YEAR,
            coastal: false,
            distance_from_coast: 0.0,
            neo_cache_ttl_secs: 300,
            comparison: ComparisonPresets::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the formulas cannot use.
    pub fn validate(&self) -> Result<()> {
        let presets = &self.comparison;
        let mut check = FieldCheck::new();
        check.derived("density", self.density, Domain::Positive);
        check.derived("impactProbability", self.impact_probability, Domain::Probability);
        check.derived("timeToImpactDays", self.time_to_impact_days, Domain::NonNegative);
        check.derived("distanceFromCoast", self.distance_from_coast, Domain::NonNegative);
        check.derived("impactorMassFraction", presets.impactor_mass_fraction, Domain::Positive);
        check.derived("impactorVelocity", presets.impactor_velocity, Domain::Positive);
        check.derived("tractorMass", presets.tractor_mass, Domain::Positive);
        check.derived("tractorDistance", presets.tractor_distance, Domain::Positive);
        check.derived("laserPower", presets.laser_power, Domain::Positive);
        check.derived("kineticCostPerKg", presets.kinetic_cost_per_kg, Domain::NonNegative);
        check.derived("tractorCostPerKg", presets.tractor_cost_per_kg, Domain::NonNegative);
        check.derived("laserCostPerKw", presets.laser_cost_per_kw, Domain::NonNegative);
        check.finish("config")
    }
}
