//! Request and parameter types for each deflection strategy.
//!
//! A `*Request` mirrors the JSON body of the corresponding route with every
//! field optional. `validate` turns it into the plain parameter struct,
//! reporting all missing required fields at once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effect::{
    gravity_tractor_effect, kinetic_impactor_effect, laser_ablation_effect,
    nuclear_deflection_effect, DeflectionEffect,
};
use super::{DeflectionOutcome, DeflectionResults, MissionRequirements, Strategy, StrategyParameters};
use crate::error::{Domain, FieldCheck, Result};
use crate::types::{DAYS_PER_YEAR, DEG_TO_RAD, RAD_TO_DEG};

/// Default length of tractor and laser operations (days).
pub const DEFAULT_OPERATION_DAYS: f64 = 365.0;

/// Default nuclear standoff distance (km).
pub const DEFAULT_DETONATION_DISTANCE_KM: f64 = 100.0;

/// Required lead time before impact for each strategy (days).
const KINETIC_LEAD_DAYS: f64 = DAYS_PER_YEAR;
const TRACTOR_LEAD_DAYS: f64 = 2.0 * DAYS_PER_YEAR;
const LASER_LEAD_DAYS: f64 = 3.0 * DAYS_PER_YEAR;
const NUCLEAR_LEAD_DAYS: f64 = 180.0;

fn results(strategy: Strategy, effect: DeflectionEffect, probability_basis: f64, time_to_impact: f64) -> DeflectionResults {
    DeflectionResults {
        velocity_change: effect.velocity_change,
        deflection_distance: effect.deflection_distance,
        effectiveness: effect.effectiveness(),
        success_probability: strategy.success_probability(probability_basis, time_to_impact),
    }
}

// Kinetic impactor

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KineticImpactorRequest {
    /// Asteroid mass (kg)
    pub target_mass: Option<f64>,
    /// Asteroid velocity (km/s)
    pub target_velocity: Option<f64>,
    /// Spacecraft mass (kg)
    pub impactor_mass: Option<f64>,
    /// Closing velocity (km/s)
    pub impactor_velocity: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Degrees from perpendicular, default 0. Must lie strictly between
    /// -90 and 90: Δv is scaled by cos(angle), and a grazing or reversed
    /// hit would push the asteroid backwards.
    pub impact_angle: Option<f64>,
}

impl KineticImpactorRequest {
    pub fn new(
        target_mass: f64,
        target_velocity: f64,
        impactor_mass: f64,
        impactor_velocity: f64,
        time_to_impact: f64,
    ) -> Self {
        Self {
            target_mass: Some(target_mass),
            target_velocity: Some(target_velocity),
            impactor_mass: Some(impactor_mass),
            impactor_velocity: Some(impactor_velocity),
            time_to_impact: Some(time_to_impact),
            impact_angle: None,
        }
    }

    pub fn with_impact_angle(mut self, degrees: f64) -> Self {
        self.impact_angle = Some(degrees);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<KineticImpactor> {
        let mut check = FieldCheck::new();
        let params = KineticImpactor {
            target_mass: check.required("targetMass", self.target_mass, Domain::Positive),
            target_velocity: check.required("targetVelocity", self.target_velocity, Domain::Positive),
            impactor_mass: check.required("impactorMass", self.impactor_mass, Domain::Positive),
            impactor_velocity: check.required(
                "impactorVelocity",
                self.impactor_velocity,
                Domain::Positive,
            ),
            time_to_impact: check.required("timeToImpact", self.time_to_impact, Domain::Positive),
            impact_angle: check.optional(
                "impactAngle",
                self.impact_angle,
                0.0,
                Domain::ObliqueAngle,
            ),
        };
        check.derived(
            "deflectionDistance",
            params.head_on_effect().deflection_distance,
            Domain::Finite,
        );
        check.finish("kinetic-impactor")?;
        Ok(params)
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome> {
        Ok(self.validate()?.evaluate())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticImpactor {
    pub target_mass: f64,
    pub target_velocity: f64,
    pub impactor_mass: f64,
    pub impactor_velocity: f64,
    pub time_to_impact: f64,
    pub impact_angle: f64,
}

impl KineticImpactor {
    /// Head-on effect, before the impact angle is applied.
    pub fn head_on_effect(&self) -> DeflectionEffect {
        kinetic_impactor_effect(
            self.impactor_mass,
            self.impactor_velocity,
            self.target_mass,
            self.time_to_impact,
        )
    }

    pub fn evaluate(&self) -> DeflectionOutcome {
        let head_on = self.head_on_effect();
        let effect = head_on.scaled((self.impact_angle * DEG_TO_RAD).cos());

        // Success is judged on the head-on effectiveness
        let results = results(
            Strategy::KineticImpactor,
            effect,
            head_on.effectiveness(),
            self.time_to_impact,
        );
        let requirements = MissionRequirements {
            launch_window: self.time_to_impact - KINETIC_LEAD_DAYS,
            approach_velocity: self.impactor_velocity,
            targeting_accuracy: Some((0.1 / self.impactor_velocity).atan() * RAD_TO_DEG),
            fuel_mass: Some(self.impactor_mass * 0.1),
            total_mission_mass: self.impactor_mass * 1.1,
            ..Default::default()
        };

        debug!(
            velocity_change = results.velocity_change,
            effectiveness = results.effectiveness,
            impact_angle = self.impact_angle,
            "evaluated kinetic impactor"
        );
        DeflectionOutcome::new(StrategyParameters::KineticImpactor(*self), results, requirements)
    }
}

// Gravity tractor

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GravityTractorRequest {
    /// Asteroid mass (kg)
    pub target_mass: Option<f64>,
    /// Spacecraft mass (kg)
    pub tractor_mass: Option<f64>,
    /// Standoff distance (m)
    pub distance: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Operation length (days), default 365.
    pub operation_time: Option<f64>,
}

impl GravityTractorRequest {
    pub fn new(target_mass: f64, tractor_mass: f64, distance: f64, time_to_impact: f64) -> Self {
        Self {
            target_mass: Some(target_mass),
            tractor_mass: Some(tractor_mass),
            distance: Some(distance),
            time_to_impact: Some(time_to_impact),
            operation_time: None,
        }
    }

    pub fn with_operation_time(mut self, days: f64) -> Self {
        self.operation_time = Some(days);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<GravityTractor> {
        let mut check = FieldCheck::new();
        let params = GravityTractor {
            target_mass: check.required("targetMass", self.target_mass, Domain::Positive),
            tractor_mass: check.required("tractorMass", self.tractor_mass, Domain::Positive),
            distance: check.required("distance", self.distance, Domain::Positive),
            time_to_impact: check.required("timeToImpact", self.time_to_impact, Domain::Positive),
            operation_time: check.optional(
                "operationTime",
                self.operation_time,
                DEFAULT_OPERATION_DAYS,
                Domain::Positive,
            ),
        };
        check.derived("deflectionDistance", params.effect().deflection_distance, Domain::Finite);
        check.finish("gravity-tractor")?;
        Ok(params)
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome> {
        Ok(self.validate()?.evaluate())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GravityTractor {
    pub target_mass: f64,
    pub tractor_mass: f64,
    pub distance: f64,
    pub time_to_impact: f64,
    pub operation_time: f64,
}

impl GravityTractor {
    pub fn effect(&self) -> DeflectionEffect {
        // The pull is integrated over the full warning time, not the operation time
        gravity_tractor_effect(self.tractor_mass, self.distance, self.target_mass, self.time_to_impact)
    }

    pub fn evaluate(&self) -> DeflectionOutcome {
        let effect = self.effect();
        let results = results(
            Strategy::GravityTractor,
            effect,
            effect.effectiveness(),
            self.time_to_impact,
        );
        let requirements = MissionRequirements {
            launch_window: self.time_to_impact - TRACTOR_LEAD_DAYS,
            approach_velocity: 0.1,
            station_keeping: true,
            fuel_mass: Some(self.tractor_mass * 0.2),
            total_mission_mass: self.tractor_mass * 1.2,
            operation_duration: Some(self.operation_time),
            ..Default::default()
        };

        debug!(
            velocity_change = results.velocity_change,
            effectiveness = results.effectiveness,
            "evaluated gravity tractor"
        );
        DeflectionOutcome::new(StrategyParameters::GravityTractor(*self), results, requirements)
    }
}

// Laser ablation

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaserAblationRequest {
    /// Asteroid mass (kg)
    pub target_mass: Option<f64>,
    /// Laser power (kW)
    pub laser_power: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Operation length (days), default 365.
    pub operation_time: Option<f64>,
}

impl LaserAblationRequest {
    pub fn new(target_mass: f64, laser_power: f64, time_to_impact: f64) -> Self {
        Self {
            target_mass: Some(target_mass),
            laser_power: Some(laser_power),
            time_to_impact: Some(time_to_impact),
            operation_time: None,
        }
    }

    pub fn with_operation_time(mut self, days: f64) -> Self {
        self.operation_time = Some(days);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<LaserAblation> {
        let mut check = FieldCheck::new();
        let params = LaserAblation {
            target_mass: check.required("targetMass", self.target_mass, Domain::Positive),
            laser_power: check.required("laserPower", self.laser_power, Domain::Positive),
            time_to_impact: check.required("timeToImpact", self.time_to_impact, Domain::Positive),
            operation_time: check.optional(
                "operationTime",
                self.operation_time,
                DEFAULT_OPERATION_DAYS,
                Domain::Positive,
            ),
        };
        check.derived("deflectionDistance", params.effect().deflection_distance, Domain::Finite);
        check.finish("laser-ablation")?;
        Ok(params)
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome> {
        Ok(self.validate()?.evaluate())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaserAblation {
    pub target_mass: f64,
    pub laser_power: f64,
    pub time_to_impact: f64,
    pub operation_time: f64,
}

impl LaserAblation {
    pub fn effect(&self) -> DeflectionEffect {
        laser_ablation_effect(self.laser_power, self.time_to_impact, self.target_mass)
    }

    pub fn evaluate(&self) -> DeflectionOutcome {
        let effect = self.effect();
        let results = results(
            Strategy::LaserAblation,
            effect,
            effect.effectiveness(),
            self.time_to_impact,
        );
        let requirements = MissionRequirements {
            launch_window: self.time_to_impact - LASER_LEAD_DAYS,
            approach_velocity: 0.05,
            station_keeping: true,
            power_generation: Some(self.laser_power * 1.2),
            // 0.1 kg of hardware per kW
            total_mission_mass: self.laser_power * 0.1,
            operation_duration: Some(self.operation_time),
            ..Default::default()
        };

        debug!(
            velocity_change = results.velocity_change,
            effectiveness = results.effectiveness,
            "evaluated laser ablation"
        );
        DeflectionOutcome::new(StrategyParameters::LaserAblation(*self), results, requirements)
    }
}

// Nuclear deflection

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NuclearDeflectionRequest {
    /// Asteroid mass (kg)
    pub target_mass: Option<f64>,
    /// Asteroid velocity (km/s)
    pub target_velocity: Option<f64>,
    /// Yield (megatons)
    pub nuclear_yield: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Standoff distance (km), default 100.
    pub detonation_distance: Option<f64>,
}

impl NuclearDeflectionRequest {
    pub fn new(target_mass: f64, target_velocity: f64, nuclear_yield: f64, time_to_impact: f64) -> Self {
        Self {
            target_mass: Some(target_mass),
            target_velocity: Some(target_velocity),
            nuclear_yield: Some(nuclear_yield),
            time_to_impact: Some(time_to_impact),
            detonation_distance: None,
        }
    }

    pub fn with_detonation_distance(mut self, km: f64) -> Self {
        self.detonation_distance = Some(km);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<NuclearDeflection> {
        let mut check = FieldCheck::new();
        let params = NuclearDeflection {
            target_mass: check.required("targetMass", self.target_mass, Domain::Positive),
            target_velocity: check.required("targetVelocity", self.target_velocity, Domain::Positive),
            nuclear_yield: check.required("nuclearYield", self.nuclear_yield, Domain::Positive),
            time_to_impact: check.required("timeToImpact", self.time_to_impact, Domain::Positive),
            detonation_distance: check.optional(
                "detonationDistance",
                self.detonation_distance,
                DEFAULT_DETONATION_DISTANCE_KM,
                Domain::Positive,
            ),
        };
        check.derived("deflectionDistance", params.effect().deflection_distance, Domain::Finite);
        check.finish("nuclear-deflection")?;
        Ok(params)
    }

    pub fn evaluate(&self) -> Result<DeflectionOutcome> {
        Ok(self.validate()?.evaluate())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NuclearDeflection {
    pub target_mass: f64,
    pub target_velocity: f64,
    pub nuclear_yield: f64,
    pub time_to_impact: f64,
    pub detonation_distance: f64,
}

impl NuclearDeflection {
    pub fn effect(&self) -> DeflectionEffect {
        nuclear_deflection_effect(self.nuclear_yield, self.target_mass, self.time_to_impact)
    }

    pub fn evaluate(&self) -> DeflectionOutcome {
        let effect = self.effect();
        let results = results(
            Strategy::NuclearDeflection,
            effect,
            effect.effectiveness(),
            self.time_to_impact,
        );
        let requirements = MissionRequirements {
            launch_window: self.time_to_impact - NUCLEAR_LEAD_DAYS,
            approach_velocity: self.target_velocity * 0.1,
            targeting_accuracy: Some(0.1),
            // 1000 kg per megaton
            total_mission_mass: self.nuclear_yield * 1000.0,
            detonation_distance: Some(self.detonation_distance),
            ..Default::default()
        };

        debug!(
            velocity_change = results.velocity_change,
            effectiveness = results.effectiveness,
            "evaluated nuclear deflection"
        );
        DeflectionOutcome::new(StrategyParameters::NuclearDeflection(*self), results, requirements)
    }
}
