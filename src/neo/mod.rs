//! NASA NeoWs asteroid records.
//!
//! Only the fields the simulator reads are modelled; everything else in a
//! NeoWs response is ignored on deserialization. NeoWs encodes velocities as
//! decimal strings, so they are kept as strings here and parsed on use.

pub mod cache;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::impact::ImpactRequest;

pub use cache::TtlCache;

/// Min/max estimate in one unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    pub fn mean(&self) -> f64 {
        (self.estimated_diameter_min + self.estimated_diameter_max) / 2.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: Option<DiameterRange>,
    pub kilometers: Option<DiameterRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
    pub kilometers_per_hour: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: Option<String>,
    pub orbiting_body: Option<String>,
    pub relative_velocity: Option<RelativeVelocity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

impl NeoRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Mean of the estimated min and max diameter in meters.
    pub fn mean_diameter_m(&self) -> Option<f64> {
        let range = self.estimated_diameter.as_ref()?.meters?;
        Some(range.mean()).filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Relative velocity of the first close approach (km/s).
    ///
    /// Unparseable or non-positive values count as absent.
    pub fn approach_velocity_km_s(&self) -> Option<f64> {
        self.close_approach_data
            .first()?
            .relative_velocity
            .as_ref()?
            .kilometers_per_second
            .as_deref()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Paging block of a browse response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// One page of the NeoWs browse endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeoBrowsePage {
    #[serde(default)]
    pub near_earth_objects: Vec<NeoRecord>,
    pub page: Option<PageInfo>,
}

impl NeoBrowsePage {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find(&self, id: &str) -> Option<&NeoRecord> {
        self.near_earth_objects.iter().find(|neo| neo.id == id)
    }
}

impl ImpactRequest {
    /// Fill a missing diameter or velocity from a NeoWs record.
    ///
    /// Values already on the request win. The record's id becomes the
    /// request's `asteroid_id` when none is set.
    pub fn fill_from_neo(mut self, record: &NeoRecord) -> Result<Self> {
        if self.diameter.is_none() {
            let diameter = record
                .mean_diameter_m()
                .ok_or_else(|| EngineError::IncompleteRecord {
                    id: record.id.clone(),
                    field: "estimated_diameter",
                })?;
            self.diameter = Some(diameter);
        }
        if self.velocity.is_none() {
            let velocity =
                record
                    .approach_velocity_km_s()
                    .ok_or_else(|| EngineError::IncompleteRecord {
                        id: record.id.clone(),
                        field: "close_approach_data",
                    })?;
            self.velocity = Some(velocity);
        }
        if self.asteroid_id.is_none() {
            self.asteroid_id = Some(record.id.clone());
        }

        debug!(
            id = %record.id,
            diameter = ?self.diameter,
            velocity = ?self.velocity,
            "filled impact request from NeoWs record"
        );
        Ok(self)
    }
}
