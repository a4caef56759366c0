//! Systems that operate on the zone world when their tasks come due.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all zone state lives in components.

pub mod activation;
pub mod barrage;
pub mod snapshot;

use flak_core::components::{TargetFilter, ZoneArea};
use flak_core::types::Position;

use crate::host::FlakHost;

/// Positions of target contacts horizontally inside a zone.
pub(crate) fn contacts_over<H: FlakHost + ?Sized>(
    host: &H,
    area: &ZoneArea,
    target: &TargetFilter,
) -> Vec<Position> {
    target
        .categories
        .iter()
        .flat_map(|&category| host.aircraft_positions(target.side, category))
        .filter(|pos| pos.horizontal_range_to(&area.center) <= area.radius)
        .collect()
}
