//! Impact outcome of an asteroid strike.
//!
//! [`ImpactRequest`] is the validated entry point: it resolves optional
//! scenario fields against an [`EngineConfig`], applies the deflection
//! slider's velocity change and runs every scaling law in [`scaling`] and
//! [`assessment`] over the adjusted velocity.

pub mod assessment;
pub mod scaling;

#[cfg(test)]
mod proptest_impact;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{Domain, FieldCheck, Result};

pub use assessment::{
    environmental_effects, risk_score, EnvironmentalDamage, EnvironmentalEffects, ImpactSite,
    ImpactType, RiskAssessment, RiskFactors, RiskLevel,
};
pub use scaling::{
    atmospheric_entry, crater_diameter, impact_energy, mass, seismic_magnitude, stony_mass,
    transient_crater_diameter, tnt_equivalent, tsunami_height, AsteroidParameters,
    AtmosphericEntry,
};

/// Degrees of map shift per km/s of velocity change.
const IMPACT_SHIFT_DEG_PER_KM_S: f64 = 2.0;

/// Request for an impact simulation.
///
/// Only `diameter` and `velocity` are required. The scenario fields
/// (site, probability, warning time) fall back to [`EngineConfig`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpactRequest {
    /// NeoWs id of the asteroid the inputs came from, if any.
    pub asteroid_id: Option<String>,
    /// Diameter (m)
    pub diameter: Option<f64>,
    /// Velocity before deflection (km/s)
    pub velocity: Option<f64>,
    /// Velocity change from deflection (km/s), may be negative.
    pub velocity_change: Option<f64>,
    pub is_coastal: Option<bool>,
    pub impact_probability: Option<f64>,
    /// Warning time (days)
    pub time_to_impact: Option<f64>,
    /// Distance of the impact point from the coast (m)
    pub distance_from_coast: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Everything the simulator reports about one impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactOutcome {
    pub asteroid_id: Option<String>,
    /// Diameter (m)
    pub diameter: f64,
    /// Velocity before deflection (km/s)
    pub original_velocity: f64,
    /// Velocity after deflection (km/s)
    pub adjusted_velocity: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Kinetic energy (J)
    pub energy: f64,
    /// Final crater diameter (m)
    pub crater: f64,
    /// Transient crater diameter (m)
    pub transient_crater: f64,
    /// Approximate shift of the impact point (degrees)
    pub impact_shift_lat: f64,
    pub impact_shift_lng: f64,
    /// TNT equivalent (t)
    pub tnt_equivalent: f64,
    pub seismic_magnitude: f64,
    /// Tsunami height (m)
    pub tsunami_height: f64,
    pub atmospheric_effects: AtmosphericEntry,
    pub environmental_effects: EnvironmentalEffects,
    pub risk_assessment: RiskAssessment,
    pub impact_location: ImpactSite,
}

impl ImpactRequest {
    pub fn new(diameter: f64, velocity: f64) -> Self {
        Self {
            diameter: Some(diameter),
            velocity: Some(velocity),
            ..Default::default()
        }
    }

    pub fn with_velocity_change(mut self, velocity_change: f64) -> Self {
        self.velocity_change = Some(velocity_change);
        self
    }

    pub fn with_site(mut self, site: ImpactSite) -> Self {
        self.lat = Some(site.lat);
        self.lng = Some(site.lng);
        self.is_coastal = Some(site.is_coastal);
        self
    }

    pub fn with_impact_probability(mut self, probability: f64) -> Self {
        self.impact_probability = Some(probability);
        self
    }

    pub fn with_time_to_impact(mut self, days: f64) -> Self {
        self.time_to_impact = Some(days);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the request and compute the full impact outcome.
    pub fn evaluate(&self, config: &EngineConfig) -> Result<ImpactOutcome> {
        config.validate()?;

        let mut check = FieldCheck::new();
        let diameter = check.required("diameter", self.diameter, Domain::Positive);
        let velocity = check.required("velocity", self.velocity, Domain::Positive);
        let velocity_change =
            check.optional("velocityChange", self.velocity_change, 0.0, Domain::Finite);
        let probability = check.optional(
            "impactProbability",
            self.impact_probability,
            config.impact_probability,
            Domain::Probability,
        );
        let time_to_impact = check.optional(
            "timeToImpact",
            self.time_to_impact,
            config.time_to_impact_days,
            Domain::NonNegative,
        );
        let distance_from_coast = check.optional(
            "distanceFromCoast",
            self.distance_from_coast,
            config.distance_from_coast,
            Domain::NonNegative,
        );
        let lat = check.optional("lat", self.lat, 0.0, Domain::Finite);
        let lng = check.optional("lng", self.lng, 0.0, Domain::Finite);

        let adjusted_velocity = velocity + velocity_change;
        // A slider can push the body to rest or backwards; nothing downstream is defined there
        check.derived("adjustedVelocity", adjusted_velocity, Domain::Positive);
        // Large but finite inputs can still overflow the cubic mass term
        check.derived(
            "energy",
            impact_energy(mass(diameter, config.density), adjusted_velocity),
            Domain::Finite,
        );
        check.finish("impact")?;

        let site = ImpactSite {
            lat,
            lng,
            is_coastal: self.is_coastal.unwrap_or(config.coastal),
        };
        let asteroid =
            AsteroidParameters::new(diameter, adjusted_velocity).with_density(config.density);

        let outcome = simulate(
            &asteroid,
            velocity,
            &site,
            probability,
            time_to_impact,
            distance_from_coast,
        );

        debug!(
            diameter,
            adjusted_velocity,
            energy = outcome.energy,
            crater = outcome.crater,
            impact_type = ?outcome.environmental_effects.impact_type,
            "computed impact outcome"
        );

        Ok(ImpactOutcome {
            asteroid_id: self.asteroid_id.clone(),
            ..outcome
        })
    }
}

/// Run every scaling law for an already-validated body.
///
/// `asteroid.velocity` is the adjusted velocity; `original_velocity` is only
/// used for the impact-shift estimate and the echo field.
pub fn simulate(
    asteroid: &AsteroidParameters,
    original_velocity: f64,
    site: &ImpactSite,
    impact_probability: f64,
    time_to_impact_days: f64,
    distance_from_coast: f64,
) -> ImpactOutcome {
    let mass = asteroid.mass();
    let energy = asteroid.energy();
    let velocity_change = asteroid.velocity - original_velocity;

    ImpactOutcome {
        asteroid_id: None,
        diameter: asteroid.diameter,
        original_velocity,
        adjusted_velocity: asteroid.velocity,
        mass,
        energy,
        crater: crater_diameter(energy),
        transient_crater: transient_crater_diameter(energy),
        impact_shift_lat: velocity_change * IMPACT_SHIFT_DEG_PER_KM_S,
        impact_shift_lng: velocity_change * IMPACT_SHIFT_DEG_PER_KM_S,
        tnt_equivalent: tnt_equivalent(energy),
        seismic_magnitude: seismic_magnitude(energy),
        tsunami_height: tsunami_height(energy, distance_from_coast),
        atmospheric_effects: atmospheric_entry(asteroid),
        environmental_effects: environmental_effects(energy, site),
        risk_assessment: risk_score(asteroid, impact_probability, time_to_impact_days),
        impact_location: *site,
    }
}

/// Compute an impact with default scenario assumptions.
///
/// # Arguments
/// * `diameter` - Diameter (m), must be positive
/// * `velocity` - Velocity (km/s), must be positive
/// * `velocity_change` - Deflection velocity change (km/s)
pub fn compute_impact(diameter: f64, velocity: f64, velocity_change: f64) -> Result<ImpactOutcome> {
    ImpactRequest::new(diameter, velocity)
        .with_velocity_change(velocity_change)
        .evaluate(&EngineConfig::default())
}
