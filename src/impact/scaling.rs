//! Closed-form impact scaling laws.
//!
//! Each function takes plain SI-ish numbers and returns a single quantity:
//! - Mass and kinetic energy of the impactor
//! - TNT equivalent and seismic magnitude
//! - Crater, tsunami and atmospheric-entry scales
//!
//! None of these validate their input. Degenerate values (zero or negative
//! diameters, zero energy) are propagated as-is; the request layer in
//! [`super::ImpactRequest`] is responsible for rejecting them first.

use serde::Serialize;

use crate::types::{joules_to_tj, km_s_to_m_s, STONY_DENSITY, TNT_J_PER_TONNE};

/// Crater diameter exponent on energy in TJ.
const CRATER_EXPONENT: f64 = 0.294;

/// Final crater diameter over transient diameter (rim collapse).
const CRATER_COLLAPSE_FACTOR: f64 = 1.3;

/// Tsunami height attenuation length (m).
const TSUNAMI_ATTENUATION_M: f64 = 100_000.0;

/// Scale height of the reference airburst for a 100 m body (m).
const AIRBURST_REFERENCE_ALTITUDE_M: f64 = 8500.0;

/// Mass of a spherical body.
///
/// # Arguments
/// * `diameter` - Diameter in meters
/// * `density` - Bulk density in kg/m³ (3000 for stony bodies)
///
/// # Returns
/// Mass in kg
#[inline]
pub fn mass(diameter: f64, density: f64) -> f64 {
    let radius = diameter / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    volume * density
}

/// Mass of a stony body of the given diameter.
#[inline]
pub fn stony_mass(diameter: f64) -> f64 {
    mass(diameter, STONY_DENSITY)
}

/// Kinetic energy in Joules for a mass (kg) arriving at `velocity_km_s`.
#[inline]
pub fn impact_energy(mass: f64, velocity_km_s: f64) -> f64 {
    let v = km_s_to_m_s(velocity_km_s);
    0.5 * mass * v * v
}

/// Energy expressed as metric tons of TNT.
#[inline]
pub fn tnt_equivalent(energy_j: f64) -> f64 {
    energy_j / TNT_J_PER_TONNE
}

/// Transient (excavated) crater diameter in meters.
#[inline]
pub fn transient_crater_diameter(energy_j: f64) -> f64 {
    joules_to_tj(energy_j).powf(CRATER_EXPONENT) * 1000.0
}

/// Final crater diameter in meters, after rim collapse.
#[inline]
pub fn crater_diameter(energy_j: f64) -> f64 {
    transient_crater_diameter(energy_j) * CRATER_COLLAPSE_FACTOR
}

/// Richter-like magnitude of the seismic shock. Never negative.
#[inline]
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    // log10(0) is -inf, which the floor absorbs
    ((energy_j.log10() - 4.8) / 1.5).max(0.0)
}

/// Tsunami wave height in meters at `distance_from_coast_m`.
#[inline]
pub fn tsunami_height(energy_j: f64, distance_from_coast_m: f64) -> f64 {
    let base_height = joules_to_tj(energy_j).powf(0.25) * 100.0;
    base_height * (-distance_from_coast_m / TSUNAMI_ATTENUATION_M).exp()
}

/// Size, speed and composition of an incoming body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AsteroidParameters {
    /// Diameter (m)
    pub diameter: f64,
    /// Velocity (km/s)
    pub velocity: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
}

impl AsteroidParameters {
    /// A stony body.
    pub fn new(diameter: f64, velocity: f64) -> Self {
        Self {
            diameter,
            velocity,
            density: STONY_DENSITY,
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Mass in kg.
    pub fn mass(&self) -> f64 {
        mass(self.diameter, self.density)
    }

    /// Kinetic energy at impact in Joules.
    pub fn energy(&self) -> f64 {
        impact_energy(self.mass(), self.velocity)
    }
}

/// Atmospheric entry summary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphericEntry {
    /// Altitude of peak energy deposition (m).
    pub airburst_altitude: f64,
    /// Radius of the fireball (m).
    pub fireball_radius: f64,
    /// Entry energy in terajoules.
    pub energy: f64,
}

/// Airburst altitude and fireball radius of an entering body.
pub fn atmospheric_entry(asteroid: &AsteroidParameters) -> AtmosphericEntry {
    let energy_tj = joules_to_tj(asteroid.energy());

    AtmosphericEntry {
        airburst_altitude: AIRBURST_REFERENCE_ALTITUDE_M * (asteroid.diameter / 100.0).powf(0.4),
        fireball_radius: energy_tj.powf(0.4) * 1000.0,
        energy: energy_tj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_of_100m_stony_body() {
        // 4/3 π 50³ × 3000
        let m = stony_mass(100.0);
        assert_relative_eq!(m, 1.570_796_326_8e9, max_relative = 1e-9);
    }

    #[test]
    fn test_mass_scales_linearly_with_density() {
        assert_relative_eq!(mass(100.0, 6000.0), 2.0 * mass(100.0, 3000.0), max_relative = 1e-12);
    }

    #[test]
    fn test_parameters_default_to_stony_density() {
        let asteroid = AsteroidParameters::new(100.0, 20.0);
        assert_eq!(asteroid.density, 3000.0);
        assert_relative_eq!(asteroid.mass(), stony_mass(100.0));

        let iron = asteroid.with_density(7800.0);
        assert_relative_eq!(iron.mass() / asteroid.mass(), 2.6, max_relative = 1e-12);
    }

    #[test]
    fn test_energy_reference() {
        // 1000 kg at 1 km/s → ½ × 1000 × 1000² = 5e8 J
        assert_relative_eq!(impact_energy(1000.0, 1.0), 5e8);
    }

    #[test]
    fn test_tnt_equivalent_of_one_kiloton() {
        // 1 kt = 4.184e12 J = 1000 t TNT
        assert_relative_eq!(tnt_equivalent(4.184e12), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_crater_at_one_terajoule() {
        // (1 TJ)^0.294 = 1 → 1000 m transient, 1300 m final
        assert_relative_eq!(transient_crater_diameter(1e12), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(crater_diameter(1e12), 1300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_crater_of_zero_energy_is_zero() {
        assert_eq!(crater_diameter(0.0), 0.0);
    }

    #[test]
    fn test_seismic_magnitude_floor() {
        assert_eq!(seismic_magnitude(0.0), 0.0);
        assert_eq!(seismic_magnitude(1.0), 0.0);
        // 10^(4.8 + 1.5 × 6) J → magnitude 6
        assert_relative_eq!(seismic_magnitude(10f64.powf(13.8)), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tsunami_attenuation() {
        let at_coast = tsunami_height(1e16, 0.0);
        // (1e4 TJ)^0.25 × 100 = 1000 m
        assert_relative_eq!(at_coast, 1000.0, max_relative = 1e-12);

        let inland = tsunami_height(1e16, 100_000.0);
        assert_relative_eq!(inland / at_coast, (-1.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_atmospheric_entry_reference_body() {
        let entry = atmospheric_entry(&AsteroidParameters::new(100.0, 20.0));

        // 100 m body sits at the reference altitude
        assert_relative_eq!(entry.airburst_altitude, 8500.0, max_relative = 1e-12);

        let expected_tj = impact_energy(stony_mass(100.0), 20.0) / 1e12;
        assert_relative_eq!(entry.energy, expected_tj, max_relative = 1e-12);
        assert_relative_eq!(entry.fireball_radius, expected_tj.powf(0.4) * 1000.0, max_relative = 1e-12);
    }
}
