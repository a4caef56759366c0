//! Snapshot system: queries the zone world and builds a FlakSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use flak_core::components::{ZoneArea, ZoneControl, ZoneName};
use flak_core::events::FlakEvent;
use flak_core::state::{FlakSnapshot, ZoneView};
use flak_core::types::SimTime;

use crate::zone::ZoneStatus;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<FlakEvent>) -> FlakSnapshot {
    FlakSnapshot {
        time: *time,
        zones: build_zones(world),
        events,
    }
}

fn build_zones(world: &World) -> Vec<ZoneView> {
    let mut zones: Vec<ZoneView> = world
        .query::<(&ZoneName, &ZoneArea, &ZoneControl, &ZoneStatus)>()
        .iter()
        .map(|(_, (name, area, control, status))| ZoneView {
            name: name.0.clone(),
            center: area.center,
            radius: area.radius,
            state: status.state(),
            altitude: control.altitude,
            control_flag: control.control_flag.clone(),
            bursts_fired: status.bursts_fired,
            bursts_suppressed: status.bursts_suppressed,
            waves_fired: status.waves_fired,
            waves_skipped: status.waves_skipped,
        })
        .collect();
    zones.sort_by(|a, b| a.name.cmp(&b.name));
    zones
}
