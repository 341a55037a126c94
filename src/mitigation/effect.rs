//! Velocity-change models for the four deflection strategies.
//!
//! Each model has distinct physics:
//! - Kinetic impactor: linear momentum transfer from a collision
//! - Gravity tractor: constant gravitational pull over the warning time
//! - Laser ablation: delivered laser energy inverted through ½mv²
//! - Nuclear deflection: standoff burst energy converted to momentum
//!
//! Units follow the simulator's established convention rather than strict
//! SI. Velocity change is in m/s for the kinetic and nuclear models, while
//! the gravity tractor and laser models integrate over the warning time in
//! days. Deflection distance is always `velocity_change × days`, so it is a
//! nominal distance used only for comparison through [`DeflectionEffect::effectiveness`].

use serde::Serialize;

use crate::types::{km_s_to_m_s, EARTH_RADIUS_M, G, J_PER_MEGATON};

/// Velocity change and the resulting miss distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeflectionEffect {
    pub velocity_change: f64,
    pub deflection_distance: f64,
}

impl DeflectionEffect {
    /// Build from a velocity change applied `time_to_impact_days` before impact.
    pub fn from_velocity_change(velocity_change: f64, time_to_impact_days: f64) -> Self {
        Self {
            velocity_change,
            deflection_distance: velocity_change * time_to_impact_days,
        }
    }

    /// Deflection distance in Earth radii. Not clamped; values above 1 are valid.
    pub fn effectiveness(&self) -> f64 {
        self.deflection_distance / EARTH_RADIUS_M
    }

    /// Scale both quantities, e.g. by the cosine of an off-axis impact.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            velocity_change: self.velocity_change * factor,
            deflection_distance: self.deflection_distance * factor,
        }
    }
}

/// Kinetic impactor momentum transfer.
///
/// Δv = m_impactor × v_impactor / M_target, with the impactor velocity
/// given in km/s and converted to m/s.
///
/// # Arguments
/// * `impactor_mass` - Spacecraft mass (kg)
/// * `impactor_velocity_km_s` - Closing velocity (km/s)
/// * `target_mass` - Asteroid mass (kg)
/// * `time_to_impact_days` - Warning time (days)
#[inline]
pub fn kinetic_impactor_effect(
    impactor_mass: f64,
    impactor_velocity_km_s: f64,
    target_mass: f64,
    time_to_impact_days: f64,
) -> DeflectionEffect {
    let momentum = impactor_mass * km_s_to_m_s(impactor_velocity_km_s);
    DeflectionEffect::from_velocity_change(momentum / target_mass, time_to_impact_days)
}

/// Gravity tractor pull integrated over the warning time.
///
/// F = G × m × M / r², a = F / M, Δv = a × t. The force is held constant
/// for the full warning time.
///
/// # Arguments
/// * `tractor_mass` - Spacecraft mass (kg)
/// * `distance` - Standoff distance from the asteroid's center (m)
/// * `target_mass` - Asteroid mass (kg)
/// * `time_to_impact_days` - Warning time (days)
#[inline]
pub fn gravity_tractor_effect(
    tractor_mass: f64,
    distance: f64,
    target_mass: f64,
    time_to_impact_days: f64,
) -> DeflectionEffect {
    let force = G * tractor_mass * target_mass / (distance * distance);
    let acceleration = force / target_mass;
    DeflectionEffect::from_velocity_change(acceleration * time_to_impact_days, time_to_impact_days)
}

/// Laser ablation energy delivered over the warning time.
///
/// E = P × t, Δv = sqrt(2E / M).
///
/// # Arguments
/// * `laser_power` - Laser power (kW)
/// * `time_to_impact_days` - Warning time (days)
/// * `target_mass` - Asteroid mass (kg)
#[inline]
pub fn laser_ablation_effect(
    laser_power: f64,
    time_to_impact_days: f64,
    target_mass: f64,
) -> DeflectionEffect {
    let energy = laser_power * time_to_impact_days;
    DeflectionEffect::from_velocity_change((2.0 * energy / target_mass).sqrt(), time_to_impact_days)
}

/// Nuclear standoff burst.
///
/// E = yield × 4.184e15 J/Mt, p = sqrt(2 E M), Δv = p / M.
///
/// # Arguments
/// * `nuclear_yield_mt` - Yield (megatons)
/// * `target_mass` - Asteroid mass (kg)
/// * `time_to_impact_days` - Warning time (days)
#[inline]
pub fn nuclear_deflection_effect(
    nuclear_yield_mt: f64,
    target_mass: f64,
    time_to_impact_days: f64,
) -> DeflectionEffect {
    let energy = nuclear_yield_mt * J_PER_MEGATON;
    let momentum = (2.0 * energy * target_mass).sqrt();
    DeflectionEffect::from_velocity_change(momentum / target_mass, time_to_impact_days)
}
