//! Test utilities for impact and deflection tests.
//!
//! Provides fixtures for well-known bodies and NeoWs records.

/// Fixtures for creating test requests and records.
pub mod fixtures {
    use crate::impact::ImpactRequest;
    use crate::neo::{CloseApproach, DiameterRange, EstimatedDiameter, NeoRecord, RelativeVelocity};

    /// Mass used by the kinetic impactor reference scenario (kg).
    pub const REFERENCE_TARGET_MASS: f64 = 2.094e8;

    /// A Tunguska-scale body: 50 m at 15 km/s.
    pub fn tunguska_request() -> ImpactRequest {
        ImpactRequest::new(50.0, 15.0)
    }

    /// A Chelyabinsk-scale body: 20 m at 19 km/s.
    pub fn chelyabinsk_request() -> ImpactRequest {
        ImpactRequest::new(20.0, 19.0)
    }

    /// A Chicxulub-scale body: 10 km at 20 km/s.
    pub fn chicxulub_request() -> ImpactRequest {
        ImpactRequest::new(10_000.0, 20.0)
    }

    /// A NeoWs record with one close approach.
    ///
    /// Diameter range is 140-160 m; velocity is 15.2 km/s.
    pub fn neo_record(id: &str) -> NeoRecord {
        NeoRecord {
            id: id.to_string(),
            name: format!("({id})"),
            absolute_magnitude_h: Some(22.1),
            is_potentially_hazardous_asteroid: true,
            estimated_diameter: Some(EstimatedDiameter {
                meters: Some(DiameterRange {
                    estimated_diameter_min: 140.0,
                    estimated_diameter_max: 160.0,
                }),
                kilometers: Some(DiameterRange {
                    estimated_diameter_min: 0.14,
                    estimated_diameter_max: 0.16,
                }),
            }),
            close_approach_data: vec![CloseApproach {
                close_approach_date: Some("2031-03-14".to_string()),
                orbiting_body: Some("Earth".to_string()),
                relative_velocity: Some(RelativeVelocity {
                    kilometers_per_second: Some("15.2".to_string()),
                    kilometers_per_hour: Some("54720".to_string()),
                }),
            }],
        }
    }
}
