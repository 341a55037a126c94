//! Property-based tests for the deflection models and the strategy comparison.

use proptest::prelude::*;

use super::effect::*;
use super::Strategy as Deflection;
use super::{ComparisonRequest, KineticImpactor};
use crate::config::EngineConfig;

fn any_strategy() -> impl Strategy<Value = Deflection> {
    prop::sample::select(Deflection::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Success probability stays inside each strategy's band.
    #[test]
    fn prop_success_probability_within_bounds(
        strategy in any_strategy(),
        effectiveness in 0.0f64..1e4,
        days in 1.0f64..10_000.0,
    ) {
        let (min, max) = strategy.success_bounds();
        let p = strategy.success_probability(effectiveness, days);
        prop_assert!((min..=max).contains(&p), "{} gave {}", strategy, p);
    }

    /// Effectiveness is always deflection distance over one Earth radius.
    #[test]
    fn prop_effectiveness_is_distance_in_earth_radii(
        dv in 0.0f64..1e3,
        days in 1.0f64..10_000.0,
    ) {
        let effect = DeflectionEffect::from_velocity_change(dv, days);
        let expected = dv * days / 6_371_000.0;
        prop_assert!((effect.effectiveness() - expected).abs() <= 1e-12 * expected.max(1.0));
    }

    /// A heavier impactor always pushes harder.
    #[test]
    fn prop_kinetic_monotone_in_impactor_mass(
        impactor_mass in 1.0f64..1e6,
        growth in 1.01f64..10.0,
        target_mass in 1e6f64..1e15,
    ) {
        let light = kinetic_impactor_effect(impactor_mass, 10.0, target_mass, 365.0);
        let heavy = kinetic_impactor_effect(impactor_mass * growth, 10.0, target_mass, 365.0);
        prop_assert!(heavy.velocity_change > light.velocity_change);
    }

    /// Tilting the impact away from perpendicular never helps.
    #[test]
    fn prop_kinetic_angle_never_increases_effect(
        angle in -89.0f64..89.0,
        target_mass in 1e6f64..1e15,
    ) {
        let params = KineticImpactor {
            target_mass,
            target_velocity: 20.0,
            impactor_mass: 1000.0,
            impactor_velocity: 10.0,
            time_to_impact: 365.0,
            impact_angle: angle,
        };
        let head_on = params.head_on_effect();
        let outcome = params.evaluate();
        prop_assert!(outcome.results.velocity_change <= head_on.velocity_change);
        prop_assert!(outcome.results.velocity_change >= 0.0);
    }

    /// The comparison table is sorted best first and the recommendation heads it.
    #[test]
    fn prop_comparison_sorted(
        target_mass in 1e6f64..1e16,
        days in 1.0f64..20_000.0,
    ) {
        let result = ComparisonRequest::new(target_mass, 20.0, days)
            .evaluate(&EngineConfig::default())
            .unwrap();

        for pair in result.comparison.windows(2) {
            prop_assert!(pair[0].effectiveness >= pair[1].effectiveness);
        }
        prop_assert_eq!(&result.recommendation, &result.comparison[0]);
        prop_assert_eq!(result.summary.lowest_risk.strategy, Deflection::GravityTractor);
    }
}
