//! ECS components for zone entities.
//!
//! Components are plain data structs with no behavior.
//! Runtime zone state lives in the simulation crate, where its writes are
//! confined to the activation system.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Unique zone name, as known to the host registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneName(pub String);

/// Circular ground area covered by a zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneArea {
    pub center: Position,
    /// Radius in meters, always > 0.
    pub radius: f64,
}

/// Which contacts a zone reacts to and fires at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetFilter {
    pub side: Coalition,
    pub categories: Vec<AircraftCategory>,
}

impl Default for TargetFilter {
    fn default() -> Self {
        Self {
            side: Coalition::Blue,
            categories: vec![AircraftCategory::Airplane, AircraftCategory::Helicopter],
        }
    }
}

/// Static control settings of a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneControl {
    /// When set, the zone follows this host flag instead of enemy presence.
    pub control_flag: Option<String>,
    pub altitude: AltitudePolicy,
    pub target: TargetFilter,
}
