//! Events emitted by the engine for hosts, logs and replays.

use serde::{Deserialize, Serialize};

use crate::enums::SkipReason;
use crate::types::Position;

/// A single flak burst handed to the host explosion primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstEvent {
    pub zone: String,
    pub position: Position,
    /// Explosion intensity in `[1, 3]`.
    pub intensity: u8,
}

/// Everything that happened during one engine tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlakEvent {
    /// Zone switched from Disabled to Enabled.
    ZoneEnabled { zone: String },
    /// Zone switched from Enabled to Disabled.
    ZoneDisabled { zone: String },
    /// Burst fired.
    Burst(BurstEvent),
    /// Burst dropped because hold-fire was active.
    BurstSuppressed { zone: String },
    /// A whole wave produced nothing.
    WaveSkipped { zone: String, reason: SkipReason },
}
