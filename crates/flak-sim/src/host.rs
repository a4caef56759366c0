//! Host boundary: everything the engine needs from the mission environment.
//!
//! The engine never talks to the simulator directly. A host implements
//! `FlakHost` and lends itself to `FlakEngine::tick` and the factory calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use flak_core::enums::{AircraftCategory, Coalition};
use flak_core::error::FlakError;
use flak_core::types::Position;

/// Geometry of a named zone in the host registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    pub center: Position,
    /// Radius in meters.
    pub radius: f64,
}

/// Capabilities provided by the mission environment.
pub trait FlakHost {
    /// Live positions of all aircraft of a coalition and category.
    fn aircraft_positions(&self, side: Coalition, category: AircraftCategory) -> Vec<Position>;

    /// Current value of a mission user flag. Unset flags read as 0.
    fn user_flag(&self, flag: &str) -> i64;

    /// Look up a named zone. Names compare case-insensitively.
    fn lookup_zone(&self, name: &str) -> Option<ZoneDefinition>;

    /// Add a named zone. Fails if the name already exists.
    fn register_zone(&mut self, name: &str, definition: ZoneDefinition) -> Result<(), FlakError>;

    /// Every registered zone name.
    fn zone_names(&self) -> Vec<String>;

    /// Fire-and-forget explosion effect.
    fn emit_explosion(&mut self, position: Position, intensity: u8);
}

/// In-memory zone registry with case-insensitive names and guarded inserts.
///
/// Hosts that keep their own mission zone table can embed one of these and
/// forward the registry half of `FlakHost` to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneRegistry {
    /// Keyed by lowercase name; value keeps the original spelling.
    zones: BTreeMap<String, (String, ZoneDefinition)>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<ZoneDefinition> {
        self.zones.get(&name.to_lowercase()).map(|(_, def)| *def)
    }

    pub fn register(&mut self, name: &str, definition: ZoneDefinition) -> Result<(), FlakError> {
        let key = name.to_lowercase();
        if self.zones.contains_key(&key) {
            return Err(FlakError::DuplicateZone(name.to_string()));
        }
        self.zones.insert(key, (name.to_string(), definition));
        Ok(())
    }

    /// Names in lowercase-sorted order.
    pub fn names(&self) -> Vec<String> {
        self.zones.values().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
