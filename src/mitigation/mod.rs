//! Asteroid deflection strategies.
//!
//! Four strategies are modelled:
//! - Kinetic impactor (DART-style collision)
//! - Gravity tractor (hovering spacecraft)
//! - Laser ablation (surface vaporization)
//! - Nuclear deflection (standoff burst)
//!
//! Each strategy has a request type with optional fields, so that a missing
//! input is reported instead of defaulted, and a validated parameter type
//! whose `evaluate` is infallible. [`StrategyRequest`] and
//! [`StrategyParameters`] tie the four together for callers that select a
//! strategy at runtime.

pub mod compare;
pub mod effect;
pub mod strategies;

#[cfg(test)]
mod proptest_mitigation;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::days_to_years;

pub use compare::{
    ComparisonRequest, ComparisonResult, ComparisonSummary, RiskTier, StrategySummary,
};
pub use effect::DeflectionEffect;
pub use strategies::{
    GravityTractor, GravityTractorRequest, KineticImpactor, KineticImpactorRequest, LaserAblation,
    LaserAblationRequest, NuclearDeflection, NuclearDeflectionRequest,
};

/// The fixed set of deflection strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    KineticImpactor,
    GravityTractor,
    LaserAblation,
    NuclearDeflection,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::KineticImpactor,
        Strategy::GravityTractor,
        Strategy::LaserAblation,
        Strategy::NuclearDeflection,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::KineticImpactor => "Kinetic Impactor",
            Strategy::GravityTractor => "Gravity Tractor",
            Strategy::LaserAblation => "Laser Ablation",
            Strategy::NuclearDeflection => "Nuclear Deflection",
        }
    }

    /// Route-style identifier, e.g. `kinetic-impactor`.
    pub fn slug(&self) -> &'static str {
        match self {
            Strategy::KineticImpactor => "kinetic-impactor",
            Strategy::GravityTractor => "gravity-tractor",
            Strategy::LaserAblation => "laser-ablation",
            Strategy::NuclearDeflection => "nuclear-deflection",
        }
    }

    pub fn advantages(&self) -> &'static [&'static str] {
        match self {
            Strategy::KineticImpactor => &[
                "Proven technology",
                "High momentum transfer",
                "Relatively simple mission",
            ],
            Strategy::GravityTractor => &[
                "No physical contact required",
                "Works on any asteroid size",
                "Gradual, controlled deflection",
            ],
            Strategy::LaserAblation => &[
                "No physical contact required",
                "Precise control",
                "Can work on small asteroids",
            ],
            Strategy::NuclearDeflection => &[
                "High energy transfer",
                "Works on large asteroids",
                "Proven technology",
            ],
        }
    }

    pub fn disadvantages(&self) -> &'static [&'static str] {
        match self {
            Strategy::KineticImpactor => &[
                "Requires precise targeting",
                "Limited to large asteroids",
                "Single attempt only",
            ],
            Strategy::GravityTractor => &[
                "Requires long operation time",
                "Limited deflection capability",
                "Complex station-keeping",
            ],
            Strategy::LaserAblation => &[
                "High power requirements",
                "Limited range",
                "Complex technology",
            ],
            Strategy::NuclearDeflection => &[
                "Political implications",
                "Debris creation",
                "Limited precision",
            ],
        }
    }

    /// Inclusive bounds of the success probability heuristic.
    pub fn success_bounds(&self) -> (f64, f64) {
        match self {
            Strategy::KineticImpactor => (0.1, 0.95),
            Strategy::GravityTractor => (0.05, 0.9),
            Strategy::LaserAblation => (0.02, 0.8),
            Strategy::NuclearDeflection => (0.1, 0.99),
        }
    }

    /// Heuristic chance the mission achieves a safe miss.
    ///
    /// Continuous and kinetic strategies are penalized per year of warning
    /// time; the nuclear option is not.
    pub fn success_probability(&self, effectiveness: f64, time_to_impact_days: f64) -> f64 {
        let years = days_to_years(time_to_impact_days);
        let raw = match self {
            Strategy::KineticImpactor => effectiveness * 100.0 / years,
            Strategy::GravityTractor => effectiveness * 50.0 / years,
            Strategy::LaserAblation => effectiveness * 30.0 / years,
            Strategy::NuclearDeflection => effectiveness * 100.0,
        };
        let (min, max) = self.success_bounds();
        raw.max(min).min(max)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical result of a deflection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeflectionResults {
    pub velocity_change: f64,
    pub deflection_distance: f64,
    /// Deflection distance in Earth radii.
    pub effectiveness: f64,
    pub success_probability: f64,
}

/// Presentation-facing mission estimates. Not physically derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequirements {
    /// Day (counted from now) by which the mission must launch. Negative
    /// when the warning time is already shorter than the required lead.
    pub launch_window: f64,
    /// Approach velocity (km/s)
    pub approach_velocity: f64,
    /// Targeting accuracy: degrees for kinetic impactors, km for nuclear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targeting_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub station_keeping: bool,
    /// Fuel mass (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_mass: Option<f64>,
    /// Total launched mass (kg)
    pub total_mission_mass: f64,
    /// Power generation (kW)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_generation: Option<f64>,
    /// Operation duration (days)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_duration: Option<f64>,
    /// Detonation standoff (km)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detonation_distance: Option<f64>,
}

/// Validated parameters of any strategy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StrategyParameters {
    KineticImpactor(KineticImpactor),
    GravityTractor(GravityTractor),
    LaserAblation(LaserAblation),
    NuclearDeflection(NuclearDeflection),
}

impl StrategyParameters {
    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyParameters::KineticImpactor(_) => Strategy::KineticImpactor,
            StrategyParameters::GravityTractor(_) => Strategy::GravityTractor,
            StrategyParameters::LaserAblation(_) => Strategy::LaserAblation,
            StrategyParameters::NuclearDeflection(_) => Strategy::NuclearDeflection,
        }
    }

    pub fn evaluate(&self) -> DeflectionOutcome {
        match self {
            StrategyParameters::KineticImpactor(p) => p.evaluate(),
            StrategyParameters::GravityTractor(p) => p.evaluate(),
            StrategyParameters::LaserAblation(p) => p.evaluate(),
            StrategyParameters::NuclearDeflection(p) => p.evaluate(),
        }
    }
}

/// Unvalidated request for any strategy, tagged by `strategy`.
///
/// ```json
/// { "strategy": "gravity-tractor", "targetMass": 2.7e10, "tractorMass": 20000,
///   "distance": 200, "timeToImpact": 3650 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum StrategyRequest {
    KineticImpactor(KineticImpactorRequest),
    GravityTractor(GravityTractorRequest),
    LaserAblation(LaserAblationRequest),
    NuclearDeflection(NuclearDeflectionRequest),
}

impl StrategyRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyRequest::KineticImpactor(_) => Strategy::KineticImpactor,
            StrategyRequest::GravityTractor(_) => Strategy::GravityTractor,
            StrategyRequest::LaserAblation(_) => Strategy::LaserAblation,
            StrategyRequest::NuclearDeflection(_) => Strategy::NuclearDeflection,
        }
    }

    pub fn validate(&self) -> Result<StrategyParameters> {
        Ok(match self {
            StrategyRequest::KineticImpactor(r) => StrategyParameters::KineticImpactor(r.validate()?),
            StrategyRequest::GravityTractor(r) => StrategyParameters::GravityTractor(r.validate()?),
            StrategyRequest::LaserAblation(r) => StrategyParameters::LaserAblation(r.validate()?),
            StrategyRequest::NuclearDeflection(r) => {
                StrategyParameters::NuclearDeflection(r.validate()?)
            }
        })
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome> {
        Ok(self.validate()?.evaluate())
    }
}

/// Full report for one strategy.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeflectionOutcome {
    pub strategy: Strategy,
    pub parameters: StrategyParameters,
    pub results: DeflectionResults,
    pub mission_requirements: MissionRequirements,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

impl DeflectionOutcome {
    pub(crate) fn new(
        parameters: StrategyParameters,
        results: DeflectionResults,
        mission_requirements: MissionRequirements,
    ) -> Self {
        let strategy = parameters.strategy();
        Self {
            strategy,
            parameters,
            results,
            mission_requirements,
            advantages: strategy.advantages(),
            disadvantages: strategy.disadvantages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_success_probability_bounds() {
        for strategy in Strategy::ALL {
            let (min, max) = strategy.success_bounds();
            assert_eq!(strategy.success_probability(0.0, 365.0), min, "{strategy}");
            assert_eq!(strategy.success_probability(1e6, 365.0), max, "{strategy}");
        }
    }

    #[test]
    fn test_success_probability_scaling() {
        // One year of warning: kinetic is 100 × effectiveness
        let p = Strategy::KineticImpactor.success_probability(0.005, 365.0);
        assert!((p - 0.5).abs() < 1e-12);

        // Two years halves it
        let p = Strategy::KineticImpactor.success_probability(0.005, 730.0);
        assert!((p - 0.25).abs() < 1e-12);

        // Nuclear ignores the warning time
        let a = Strategy::NuclearDeflection.success_probability(0.005, 30.0);
        let b = Strategy::NuclearDeflection.success_probability(0.005, 3000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tagged_request_dispatch() {
        let request = StrategyRequest::from_json(
            r#"{"strategy": "laser-ablation", "targetMass": 1e10, "laserPower": 1000, "timeToImpact": 365}"#,
        )
        .unwrap();
        assert_eq!(request.strategy(), Strategy::LaserAblation);

        let outcome = request.evaluate().unwrap();
        assert_eq!(outcome.strategy, Strategy::LaserAblation);
        assert_eq!(outcome.advantages, Strategy::LaserAblation.advantages());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["strategy"], "laser_ablation");
        assert_eq!(json["parameters"]["laserPower"], 1000.0);
        assert_eq!(json["missionRequirements"]["operationDuration"], 365.0);
    }

    #[test]
    fn test_tagged_request_missing_field() {
        let request = StrategyRequest::from_json(
            r#"{"strategy": "nuclear-deflection", "targetMass": 1e10, "timeToImpact": 365}"#,
        )
        .unwrap();
        let err = request.evaluate().unwrap_err();
        assert!(matches!(err, EngineError::MissingParameters { .. }));
        assert_eq!(err.fields(), vec!["targetVelocity", "nuclearYield"]);
    }

    #[test]
    fn test_unknown_strategy_is_malformed() {
        let err = StrategyRequest::from_json(r#"{"strategy": "solar-sail"}"#).unwrap_err();
        assert!(matches!(err, EngineError::Malformed(_)));
    }

    #[test]
    fn test_slugs_round_trip_through_tags() {
        for strategy in Strategy::ALL {
            let json = format!(r#"{{"strategy": "{}"}}"#, strategy.slug());
            let request = StrategyRequest::from_json(&json).unwrap();
            assert_eq!(request.strategy(), strategy);
        }
    }
}
