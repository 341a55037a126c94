//! Property-based tests for the impact scaling laws using proptest.
//!
//! These tests check monotonicity and sign invariants over the whole range of
//! bodies the simulator accepts, from house-sized rocks to extinction-class
//! impactors.

use proptest::prelude::*;

use super::scaling::*;
use super::{compute_impact, risk_score, RiskLevel};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Mass grows with diameter for any positive density.
    #[test]
    fn prop_mass_monotone_in_diameter(
        diameter in 1.0f64..20_000.0,
        growth in 1.001f64..10.0,
        density in 500.0f64..8000.0,
    ) {
        prop_assert!(mass(diameter * growth, density) > mass(diameter, density));
    }

    /// Doubling velocity quadruples kinetic energy.
    #[test]
    fn prop_energy_quadruples_with_velocity(
        diameter in 1.0f64..20_000.0,
        velocity in 1.0f64..70.0,
    ) {
        let m = stony_mass(diameter);
        let ratio = impact_energy(m, 2.0 * velocity) / impact_energy(m, velocity);
        prop_assert!((ratio - 4.0).abs() < 1e-9, "ratio {}", ratio);
    }

    /// Bigger impacts leave bigger craters.
    #[test]
    fn prop_crater_monotone_in_energy(
        energy_exp in 8.0f64..24.0,
        step in 0.01f64..3.0,
    ) {
        let low = 10f64.powf(energy_exp);
        let high = 10f64.powf(energy_exp + step);
        prop_assert!(crater_diameter(high) > crater_diameter(low));
        prop_assert!(crater_diameter(low) > transient_crater_diameter(low));
    }

    /// Magnitude is floored at zero and never decreases with energy.
    #[test]
    fn prop_seismic_magnitude_non_negative(
        energy_exp in 0.0f64..26.0,
        step in 0.0f64..2.0,
    ) {
        let low = seismic_magnitude(10f64.powf(energy_exp));
        let high = seismic_magnitude(10f64.powf(energy_exp + step));
        prop_assert!(low >= 0.0);
        prop_assert!(high >= low);
    }

    /// Tsunami height decays with distance from the coast.
    #[test]
    fn prop_tsunami_decays_inland(
        energy_exp in 10.0f64..24.0,
        distance in 0.0f64..1e6,
        extra in 1.0f64..1e5,
    ) {
        let energy = 10f64.powf(energy_exp);
        prop_assert!(tsunami_height(energy, distance + extra) < tsunami_height(energy, distance));
    }

    /// Risk level always agrees with the score it was derived from.
    #[test]
    fn prop_risk_level_matches_score(
        diameter in 1.0f64..10_000.0,
        velocity in 1.0f64..70.0,
        probability in 0.0f64..=1.0,
        days in 0.0f64..1000.0,
    ) {
        let risk = risk_score(&AsteroidParameters::new(diameter, velocity), probability, days);
        prop_assert_eq!(risk.risk_level, RiskLevel::from_score(risk.risk_score));
    }

    /// Every outcome quantity that must be non-negative is.
    #[test]
    fn prop_outcome_non_negative(
        diameter in 1.0f64..10_000.0,
        velocity in 1.0f64..70.0,
    ) {
        let outcome = compute_impact(diameter, velocity, 0.0).unwrap();
        prop_assert!(outcome.mass > 0.0);
        prop_assert!(outcome.energy > 0.0);
        prop_assert!(outcome.tnt_equivalent > 0.0);
        prop_assert!(outcome.crater >= 0.0);
        prop_assert!(outcome.seismic_magnitude >= 0.0);
        prop_assert!(outcome.tsunami_height >= 0.0);
    }
}
