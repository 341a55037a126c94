//! Common test utilities for integration tests.

use neo_impact::impact::stony_mass;
use neo_impact::mitigation::StrategySummary;
use neo_impact::EngineConfig;

/// Mass of a stony body in the reference 150 m class (kg).
pub fn reference_body_mass() -> f64 {
    stony_mass(150.0)
}

/// Default config with the impact site forced onto a coastline.
pub fn coastal_config() -> EngineConfig {
    EngineConfig {
        coastal: true,
        ..Default::default()
    }
}

/// A NeoWs lookup response for a 140-160 m body passing at 15.2 km/s.
pub fn neo_json(id: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name": "({id})",
            "estimated_diameter": {{
                "meters": {{ "estimated_diameter_min": 140.0, "estimated_diameter_max": 160.0 }}
            }},
            "close_approach_data": [
                {{ "relative_velocity": {{ "kilometers_per_second": "15.2" }}, "orbiting_body": "Earth" }}
            ]
        }}"#
    )
}

/// True when rows are ordered best first.
pub fn is_sorted_by_effectiveness(rows: &[StrategySummary]) -> bool {
    rows.windows(2)
        .all(|pair| pair[0].effectiveness >= pair[1].effectiveness)
}
