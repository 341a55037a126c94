//! Environmental classification and risk scoring of an impact.

use serde::{Deserialize, Serialize};

use super::scaling::{seismic_magnitude, tnt_equivalent, AsteroidParameters};
use crate::types::joules_to_tj;

/// TNT yield (t) above which an impact is regional.
const REGIONAL_TNT_T: f64 = 1e6;

/// TNT yield (t) above which an impact is global.
const GLOBAL_TNT_T: f64 = 1e9;

/// TNT yield (t) above which the fireball ignites firestorms.
const FIRESTORM_TNT_T: f64 = 1e7;

/// Seismic magnitude above which ground shaking counts as damage.
const SEISMIC_DAMAGE_MAGNITUDE: f64 = 4.0;

/// Keeps log10 finite for a zero impact probability.
const PROBABILITY_EPSILON: f64 = 1e-10;

/// Lead time (days) beyond which urgency stops contributing to risk.
const URGENCY_HORIZON_DAYS: f64 = 100.0;

/// Geographic reach of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactType {
    Local,
    Regional,
    Global,
}

impl ImpactType {
    /// Classify by TNT equivalent (t).
    pub fn from_tnt(tnt: f64) -> Self {
        if tnt > GLOBAL_TNT_T {
            ImpactType::Global
        } else if tnt > REGIONAL_TNT_T {
            ImpactType::Regional
        } else {
            ImpactType::Local
        }
    }
}

/// Where the impact lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSite {
    pub lat: f64,
    pub lng: f64,
    pub is_coastal: bool,
}

/// Which damage mechanisms the impact triggers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnvironmentalDamage {
    pub atmospheric: bool,
    pub seismic: bool,
    pub tsunami: bool,
    pub firestorm: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalEffects {
    pub impact_type: ImpactType,
    /// Radius of the affected area (m).
    pub affected_radius: f64,
    pub environmental_damage: EnvironmentalDamage,
}

/// Classify the environmental footprint of an impact releasing `energy_j`.
pub fn environmental_effects(energy_j: f64, site: &ImpactSite) -> EnvironmentalEffects {
    let tnt = tnt_equivalent(energy_j);

    EnvironmentalEffects {
        impact_type: ImpactType::from_tnt(tnt),
        affected_radius: joules_to_tj(energy_j).powf(0.33) * 1000.0,
        environmental_damage: EnvironmentalDamage {
            atmospheric: tnt > REGIONAL_TNT_T,
            seismic: seismic_magnitude(energy_j) > SEISMIC_DAMAGE_MAGNITUDE,
            tsunami: site.is_coastal,
            firestorm: tnt > FIRESTORM_TNT_T,
        },
    }
}

/// Coarse risk bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Fixed thresholds: above 10 is high, above 5 is medium.
    pub fn from_score(score: f64) -> Self {
        if score > 10.0 {
            RiskLevel::High
        } else if score > 5.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub energy_factor: f64,
    pub probability_factor: f64,
    pub time_factor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub factors: RiskFactors,
}

/// Composite risk heuristic.
///
/// The probability factor is `log10(p)`, so it is negative for any
/// probability below one and the score is unbounded in both directions.
/// Only [`RiskLevel`] is meant to be compared across scenarios.
///
/// # Arguments
/// * `asteroid` - Incoming body
/// * `impact_probability` - Probability of impact in [0, 1]
/// * `time_to_impact_days` - Warning time in days
pub fn risk_score(
    asteroid: &AsteroidParameters,
    impact_probability: f64,
    time_to_impact_days: f64,
) -> RiskAssessment {
    let tnt = tnt_equivalent(asteroid.energy());

    let factors = RiskFactors {
        energy_factor: (tnt + 1.0).log10(),
        probability_factor: (impact_probability + PROBABILITY_EPSILON).log10(),
        time_factor: (1.0 - time_to_impact_days / URGENCY_HORIZON_DAYS).max(0.0),
    };
    let risk_score = factors.energy_factor * factors.probability_factor * factors.time_factor;

    RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impact_type_thresholds() {
        assert_eq!(ImpactType::from_tnt(1e6), ImpactType::Local);
        assert_eq!(ImpactType::from_tnt(1.1e6), ImpactType::Regional);
        assert_eq!(ImpactType::from_tnt(1e9), ImpactType::Regional);
        assert_eq!(ImpactType::from_tnt(2e9), ImpactType::Global);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(-3.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5.01), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10.01), RiskLevel::High);
    }

    #[test]
    fn test_environmental_flags() {
        // 2e16 J ≈ 4.8e6 t TNT: regional, atmospheric, not yet a firestorm
        let site = ImpactSite {
            is_coastal: true,
            ..Default::default()
        };
        let effects = environmental_effects(2e16, &site);

        assert_eq!(effects.impact_type, ImpactType::Regional);
        assert!(effects.environmental_damage.atmospheric);
        assert!(!effects.environmental_damage.firestorm);
        assert!(effects.environmental_damage.tsunami);
        assert!(effects.environmental_damage.seismic);
        assert_relative_eq!(
            effects.affected_radius,
            (2e4f64).powf(0.33) * 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_inland_impact_has_no_tsunami() {
        let effects = environmental_effects(1e20, &ImpactSite::default());
        assert_eq!(effects.impact_type, ImpactType::Global);
        assert!(!effects.environmental_damage.tsunami);
        assert!(effects.environmental_damage.firestorm);
    }

    #[test]
    fn test_risk_is_zero_beyond_urgency_horizon() {
        let risk = risk_score(&AsteroidParameters::new(150.0, 15.2), 0.05, 365.0);
        assert_eq!(risk.factors.time_factor, 0.0);
        assert_eq!(risk.risk_score, 0.0);
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_certain_impact_has_near_zero_probability_factor() {
        let risk = risk_score(&AsteroidParameters::new(150.0, 15.2), 1.0, 0.0);
        assert!(risk.factors.probability_factor.abs() < 1e-9);
        assert_eq!(risk.factors.time_factor, 1.0);
    }

    #[test]
    fn test_unlikely_impact_scores_negative() {
        let risk = risk_score(&AsteroidParameters::new(500.0, 20.0), 0.01, 10.0);
        // log10(0.01) ≈ -2
        assert_relative_eq!(risk.factors.probability_factor, -2.0, epsilon = 1e-6);
        assert!(risk.risk_score < 0.0);
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }
}
