//! Shared physical constants and unit conversions.
//!
//! Both the impact scaling laws and the deflection models read from here so
//! every constant has exactly one definition.

// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Mean Earth radius in meters, the normalizer for deflection effectiveness.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Energy released per metric ton of TNT (J/t)
pub const TNT_J_PER_TONNE: f64 = 4.184e9;

/// Energy released per megaton of TNT (J/Mt)
pub const J_PER_MEGATON: f64 = 4.184e15;

/// Joules per terajoule
pub const J_PER_TJ: f64 = 1e12;

/// Bulk density of a stony (S-type) asteroid in kg/m³
pub const STONY_DENSITY: f64 = 3000.0;

/// Days per (non-leap) year, used for mission lead times
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Kilometers per second to meters per second
pub const KM_S_TO_M_S: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Convert energy in Joules to terajoules.
#[inline]
pub fn joules_to_tj(energy_j: f64) -> f64 {
    energy_j / J_PER_TJ
}

/// Convert a velocity in km/s to m/s.
#[inline]
pub fn km_s_to_m_s(velocity_km_s: f64) -> f64 {
    velocity_km_s * KM_S_TO_M_S
}

/// Convert a lead time in days to years.
#[inline]
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}
