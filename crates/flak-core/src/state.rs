//! Engine snapshot: the visible state returned to the host after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FlakEvent;
use crate::types::{Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlakSnapshot {
    pub time: SimTime,
    pub zones: Vec<ZoneView>,
    pub events: Vec<FlakEvent>,
}

/// Status of one zone, sorted by name in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneView {
    pub name: String,
    pub center: Position,
    /// Radius (meters).
    pub radius: f64,
    pub state: ZoneState,
    pub altitude: AltitudePolicy,
    pub control_flag: Option<String>,
    pub bursts_fired: u64,
    pub bursts_suppressed: u64,
    pub waves_fired: u64,
    pub waves_skipped: u64,
}

impl FlakSnapshot {
    /// Bursts fired during this tick.
    pub fn bursts(&self) -> impl Iterator<Item = &crate::events::BurstEvent> {
        self.events.iter().filter_map(|e| match e {
            FlakEvent::Burst(burst) => Some(burst),
            _ => None,
        })
    }

    pub fn zone(&self, name: &str) -> Option<&ZoneView> {
        self.zones.iter().find(|z| z.name.eq_ignore_ascii_case(name))
    }
}
