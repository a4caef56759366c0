//! Burst generator: random burst points inside a zone.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use flak_core::components::ZoneArea;
use flak_core::constants::{MAX_INTENSITY, MIN_INTENSITY};
use flak_core::types::Position;

/// Pick a burst position and intensity for one layer of a zone.
///
/// The radial distance is drawn uniformly from `[0, radius]`, not weighted by
/// area, so bursts cluster toward the zone center.
pub fn generate_burst<R: Rng + ?Sized>(
    rng: &mut R,
    area: &ZoneArea,
    layer_altitude: f64,
    vertical_jitter_m: f64,
) -> (Position, u8) {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(0.0..=area.radius);
    let jitter = if vertical_jitter_m > 0.0 {
        rng.gen_range(-vertical_jitter_m..=vertical_jitter_m)
    } else {
        0.0
    };
    let intensity = rng.gen_range(MIN_INTENSITY..=MAX_INTENSITY);

    let offset = DVec2::from_angle(angle) * distance;
    let position = Position::new(
        area.center.x + offset.x,
        area.center.y + offset.y,
        layer_altitude + jitter,
    );
    (position, intensity)
}
