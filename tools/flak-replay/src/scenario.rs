//! Replay scenarios: a mission zone table, scripted aircraft, and a flag
//! timeline, played back through an in-memory host.

use std::collections::HashMap;

use serde::Deserialize;

use flak_core::config::FlakConfig;
use flak_core::enums::{AircraftCategory, Coalition};
use flak_core::error::FlakError;
use flak_core::types::Position;
use flak_sim::factory::{Anchor, CorridorOptions, ScanOptions};
use flak_sim::zone::ZoneOptions;
use flak_sim::{FlakHost, ZoneDefinition, ZoneRegistry};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: FlakConfig,
    pub duration_secs: f64,
    /// Mission zone table loaded into the host registry.
    #[serde(default)]
    pub registry: Vec<RegistryZone>,
    /// Zones built one by one from the registry.
    #[serde(default)]
    pub zones: Vec<ZoneSetup>,
    #[serde(default)]
    pub scans: Vec<ScanSetup>,
    #[serde(default)]
    pub corridors: Vec<CorridorSetup>,
    #[serde(default)]
    pub aircraft: Vec<ScriptedAircraft>,
    #[serde(default)]
    pub flags: Vec<FlagChange>,
}

#[derive(Debug, Deserialize)]
pub struct RegistryZone {
    pub name: String,
    #[serde(flatten)]
    pub definition: ZoneDefinition,
}

#[derive(Debug, Deserialize)]
pub struct ZoneSetup {
    pub name: String,
    #[serde(default)]
    pub options: ZoneOptions,
}

#[derive(Debug, Deserialize)]
pub struct ScanSetup {
    pub prefix: String,
    #[serde(default)]
    pub options: ScanOptions,
}

#[derive(Debug, Deserialize)]
pub struct CorridorSetup {
    pub start: Anchor,
    pub end: Anchor,
    pub spacing_m: f64,
    #[serde(default)]
    pub options: CorridorOptions,
}

/// An aircraft flying straight between timed waypoints.
#[derive(Debug, Deserialize)]
pub struct ScriptedAircraft {
    #[serde(default)]
    pub side: Coalition,
    #[serde(default = "default_category")]
    pub category: AircraftCategory,
    pub waypoints: Vec<Waypoint>,
}

fn default_category() -> AircraftCategory {
    AircraftCategory::Airplane
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Waypoint {
    pub at_secs: f64,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlagChange {
    pub at_secs: f64,
    pub flag: String,
    pub value: i64,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, FlakError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.config.validate()?;
        Ok(scenario)
    }
}

impl ScriptedAircraft {
    /// Position at `secs`, or `None` outside the waypoint time span.
    pub fn position_at(&self, secs: f64) -> Option<Position> {
        let first = self.waypoints.first()?;
        let last = self.waypoints.last()?;
        if secs < first.at_secs || secs > last.at_secs {
            return None;
        }
        for pair in self.waypoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if secs <= b.at_secs {
                let span = b.at_secs - a.at_secs;
                let t = if span > 0.0 { (secs - a.at_secs) / span } else { 1.0 };
                return Some(a.position.lerp(&b.position, t.clamp(0.0, 1.0)));
            }
        }
        Some(last.position)
    }
}

/// In-memory host driven by the scenario script.
pub struct ReplayHost {
    registry: ZoneRegistry,
    aircraft: Vec<ScriptedAircraft>,
    flag_timeline: Vec<FlagChange>,
    flags: HashMap<String, i64>,
    now_secs: f64,
    pub explosions: u64,
}

impl ReplayHost {
    pub fn new(
        registry: ZoneRegistry,
        aircraft: Vec<ScriptedAircraft>,
        mut flag_timeline: Vec<FlagChange>,
    ) -> Self {
        flag_timeline.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        let mut host = Self {
            registry,
            aircraft,
            flag_timeline,
            flags: HashMap::new(),
            now_secs: 0.0,
            explosions: 0,
        };
        host.set_time(0.0);
        host
    }

    /// Move the script clock forward, applying flag changes that came due.
    pub fn set_time(&mut self, secs: f64) {
        self.now_secs = secs;
        let due = self
            .flag_timeline
            .iter()
            .take_while(|change| change.at_secs <= secs)
            .count();
        for change in self.flag_timeline.drain(..due) {
            tracing::info!(flag = %change.flag, value = change.value, "flag set");
            self.flags.insert(change.flag, change.value);
        }
    }
}

impl FlakHost for ReplayHost {
    fn aircraft_positions(&self, side: Coalition, category: AircraftCategory) -> Vec<Position> {
        self.aircraft
            .iter()
            .filter(|a| a.side == side && a.category == category)
            .filter_map(|a| a.position_at(self.now_secs))
            .collect()
    }

    fn user_flag(&self, flag: &str) -> i64 {
        self.flags.get(flag).copied().unwrap_or(0)
    }

    fn lookup_zone(&self, name: &str) -> Option<ZoneDefinition> {
        self.registry.lookup(name)
    }

    fn register_zone(&mut self, name: &str, definition: ZoneDefinition) -> Result<(), FlakError> {
        self.registry.register(name, definition)
    }

    fn zone_names(&self) -> Vec<String> {
        self.registry.names()
    }

    fn emit_explosion(&mut self, _position: Position, _intensity: u8) {
        self.explosions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(waypoints: &[(f64, f64)]) -> ScriptedAircraft {
        ScriptedAircraft {
            side: Coalition::Blue,
            category: AircraftCategory::Airplane,
            waypoints: waypoints
                .iter()
                .map(|&(at_secs, y)| Waypoint {
                    at_secs,
                    position: Position::new(0.0, y, 3000.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_aircraft_interpolates_between_waypoints() {
        let a = aircraft(&[(0.0, 0.0), (10.0, 1000.0), (20.0, 1000.0)]);
        assert_eq!(a.position_at(-1.0), None);
        assert!((a.position_at(5.0).unwrap().y - 500.0).abs() < 1e-9);
        assert!((a.position_at(15.0).unwrap().y - 1000.0).abs() < 1e-9);
        assert_eq!(a.position_at(20.5), None);
    }

    #[test]
    fn test_flag_timeline_applies_in_order() {
        let timeline = vec![
            FlagChange {
                at_secs: 10.0,
                flag: "F".into(),
                value: 0,
            },
            FlagChange {
                at_secs: 2.0,
                flag: "F".into(),
                value: 1,
            },
        ];
        let mut host = ReplayHost::new(ZoneRegistry::new(), Vec::new(), timeline);
        assert_eq!(host.user_flag("F"), 0);
        host.set_time(2.0);
        assert_eq!(host.user_flag("F"), 1);
        host.set_time(12.0);
        assert_eq!(host.user_flag("F"), 0);
    }

    #[test]
    fn test_scenario_parses_with_defaults() {
        let scenario = Scenario::from_json_str(
            r#"{
                "duration_secs": 30,
                "registry": [{ "name": "Flak-1", "center": { "x": 0, "y": 0, "z": 0 }, "radius": 2000 }],
                "scans": [{ "prefix": "flak" }],
                "aircraft": [{ "waypoints": [{ "at_secs": 0, "position": { "x": 0, "y": 0, "z": 3000 } }] }]
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.registry.len(), 1);
        assert_eq!(scenario.aircraft[0].side, Coalition::Blue);
        assert_eq!(scenario.config, FlakConfig::default());
    }
}
