//! Side-by-side ranking of the deflection strategies.
//!
//! Each strategy is run against the same target with representative
//! actuator parameters from [`ComparisonPresets`]. Nuclear deflection is
//! not part of the comparison.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::effect::{gravity_tractor_effect, kinetic_impactor_effect, laser_ablation_effect};
use super::Strategy;
use crate::config::{ComparisonPresets, EngineConfig};
use crate::error::{Domain, FieldCheck, Result};

/// Qualitative programme risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// One row of the comparison table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySummary {
    pub name: &'static str,
    pub strategy: Strategy,
    pub effectiveness: f64,
    /// Estimated cost (USD)
    pub cost: f64,
    /// Mission preparation time (days)
    pub time_required: f64,
    /// Technology readiness level, 1 to 9
    pub technology_readiness: u8,
    pub risk: RiskTier,
}

impl StrategySummary {
    fn new(strategy: Strategy, effectiveness: f64, cost: f64) -> Self {
        let (time_required, technology_readiness, risk) = match strategy {
            Strategy::KineticImpactor => (365.0, 9, RiskTier::Medium),
            Strategy::GravityTractor => (730.0, 6, RiskTier::Low),
            Strategy::LaserAblation => (1095.0, 4, RiskTier::High),
            Strategy::NuclearDeflection => (180.0, 5, RiskTier::High),
        };
        Self {
            name: strategy.name(),
            strategy,
            effectiveness,
            cost,
            time_required,
            technology_readiness,
            risk,
        }
    }

    /// Dollars per unit of effectiveness. Infinite when nothing is achieved.
    pub fn cost_per_effectiveness(&self) -> f64 {
        self.cost / self.effectiveness
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub most_effective: StrategySummary,
    pub most_cost_effective: StrategySummary,
    pub lowest_risk: StrategySummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Sorted by effectiveness, best first.
    pub comparison: Vec<StrategySummary>,
    pub recommendation: StrategySummary,
    pub summary: ComparisonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asteroid_diameter: Option<f64>,
}

impl ComparisonResult {
    /// Rank already-scored rows.
    ///
    /// Returns `None` for an empty table.
    pub fn rank(mut comparison: Vec<StrategySummary>) -> Option<Self> {
        sort_by_effectiveness(&mut comparison);
        let first = comparison.first()?.clone();
        Some(Self::summarize(first, comparison))
    }

    /// `comparison` must already be sorted with `first` at its head.
    fn summarize(first: StrategySummary, comparison: Vec<StrategySummary>) -> Self {
        let most_cost_effective = comparison
            .iter()
            .skip(1)
            .fold(&first, |best, row| {
                if row.cost_per_effectiveness() < best.cost_per_effectiveness() {
                    row
                } else {
                    best
                }
            })
            .clone();
        let lowest_risk = comparison
            .iter()
            .find(|row| row.risk == RiskTier::Low)
            .unwrap_or(&first)
            .clone();

        Self {
            recommendation: first.clone(),
            summary: ComparisonSummary {
                most_effective: first,
                most_cost_effective,
                lowest_risk,
            },
            comparison,
            asteroid_diameter: None,
        }
    }
}

/// Highest effectiveness first. Stable, so ties keep insertion order.
fn sort_by_effectiveness(rows: &mut [StrategySummary]) {
    rows.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));
}

/// Target scenario for a comparison.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Asteroid mass (kg)
    pub target_mass: Option<f64>,
    /// Asteroid velocity (km/s). Required but not used by the ranking.
    pub target_velocity: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Echoed back unchanged (m)
    pub asteroid_diameter: Option<f64>,
}

impl ComparisonRequest {
    pub fn new(target_mass: f64, target_velocity: f64, time_to_impact: f64) -> Self {
        Self {
            target_mass: Some(target_mass),
            target_velocity: Some(target_velocity),
            time_to_impact: Some(time_to_impact),
            asteroid_diameter: None,
        }
    }

    pub fn with_asteroid_diameter(mut self, diameter: f64) -> Self {
        self.asteroid_diameter = Some(diameter);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn evaluate(&self, config: &EngineConfig) -> Result<ComparisonResult> {
        config.validate()?;

        let mut check = FieldCheck::new();
        let target_mass = check.required("targetMass", self.target_mass, Domain::Positive);
        check.required("targetVelocity", self.target_velocity, Domain::Positive);
        let days = check.required("timeToImpact", self.time_to_impact, Domain::Positive);
        if let Some(diameter) = self.asteroid_diameter {
            check.derived("asteroidDiameter", diameter, Domain::Positive);
        }

        let mut rows = score_strategies(target_mass, days, &config.comparison);
        for row in &rows {
            check.derived("effectiveness", row.effectiveness, Domain::Finite);
        }
        check.finish("compare")?;

        sort_by_effectiveness(&mut rows);
        let [first, _, _] = &rows;
        let mut result = ComparisonResult::summarize(first.clone(), rows.to_vec());
        result.asteroid_diameter = self.asteroid_diameter;

        info!(
            recommendation = result.recommendation.name,
            effectiveness = result.recommendation.effectiveness,
            most_cost_effective = result.summary.most_cost_effective.name,
            "compared deflection strategies"
        );
        Ok(result)
    }
}

/// Score kinetic impactor, gravity tractor and laser ablation, in that order.
pub fn score_strategies(
    target_mass: f64,
    time_to_impact_days: f64,
    presets: &ComparisonPresets,
) -> [StrategySummary; 3] {
    let impactor_mass = target_mass * presets.impactor_mass_fraction;
    let kinetic = kinetic_impactor_effect(
        impactor_mass,
        presets.impactor_velocity,
        target_mass,
        time_to_impact_days,
    );
    let tractor = gravity_tractor_effect(
        presets.tractor_mass,
        presets.tractor_distance,
        target_mass,
        time_to_impact_days,
    );
    let laser = laser_ablation_effect(presets.laser_power, time_to_impact_days, target_mass);

    [
        StrategySummary::new(
            Strategy::KineticImpactor,
            kinetic.effectiveness(),
            impactor_mass * presets.kinetic_cost_per_kg,
        ),
        StrategySummary::new(
            Strategy::GravityTractor,
            tractor.effectiveness(),
            presets.tractor_mass * presets.tractor_cost_per_kg,
        ),
        StrategySummary::new(
            Strategy::LaserAblation,
            laser.effectiveness(),
            presets.laser_power * presets.laser_cost_per_kw,
        ),
    ]
}
