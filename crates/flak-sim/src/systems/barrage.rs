//! Barrage system: waves of bursts for enabled zones.
//!
//! A wave task computes the center altitude, fans out one staggered burst
//! task per burst per layer, and re-submits itself one interval later. Each
//! burst re-checks zone state and hold-fire when it comes due.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use flak_core::components::{ZoneArea, ZoneControl, ZoneName};
use flak_core::config::FlakConfig;
use flak_core::enums::{AltitudePolicy, SkipReason};
use flak_core::events::{BurstEvent, FlakEvent};
use flak_core::types::secs_to_ticks;

use crate::altitude::estimate_dominant_altitude;
use crate::burst::generate_burst;
use crate::host::FlakHost;
use crate::tasks::{Task, TaskQueue};
use crate::zone::{burst_count, ZoneStatus};

/// Run one wave for a zone. Ends the chain if the zone left `epoch`.
#[allow(clippy::too_many_arguments)]
pub fn run_wave<H: FlakHost + ?Sized>(
    world: &mut World,
    zone: Entity,
    epoch: u64,
    host: &H,
    config: &FlakConfig,
    tasks: &mut TaskQueue,
    now: u64,
    events: &mut Vec<FlakEvent>,
) {
    let Ok((name, area, control, status)) =
        world.query_one_mut::<(&ZoneName, &ZoneArea, &ZoneControl, &mut ZoneStatus)>(zone)
    else {
        return;
    };

    if !status.accepts(epoch) {
        trace!(zone = %name.0, epoch, "barrage chain ended");
        return;
    }

    let interval = secs_to_ticks(config.interval_secs).max(1);
    tasks.schedule_at(now + interval, Task::Barrage { zone, epoch });

    let center_altitude = match control.altitude {
        AltitudePolicy::Fixed(altitude) => Some(altitude),
        AltitudePolicy::Dynamic => estimate_dominant_altitude(
            &super::contacts_over(host, area, &control.target),
            config.altitude_bin_size,
        ),
    };
    let Some(center_altitude) = center_altitude else {
        status.waves_skipped += 1;
        debug!(zone = %name.0, "no altitude estimate, wave skipped");
        events.push(FlakEvent::WaveSkipped {
            zone: name.0.clone(),
            reason: SkipReason::NoAltitudeEstimate,
        });
        return;
    };

    let count = burst_count(area.radius, config.density_factor, config.density_multiplier);
    let stagger = secs_to_ticks(config.burst_stagger_secs);
    let mut index = 0u64;
    for offset in &config.layer_offsets {
        let layer_altitude = center_altitude + offset;
        for _ in 0..count {
            tasks.schedule_at(
                now + index * stagger,
                Task::Burst {
                    zone,
                    epoch,
                    layer_altitude,
                },
            );
            index += 1;
        }
    }

    status.waves_fired += 1;
    debug!(
        zone = %name.0,
        center_altitude,
        bursts = index,
        layers = config.layer_offsets.len(),
        "barrage wave scheduled"
    );
}

/// Fire a single burst unless the zone stopped or hold-fire is active.
#[allow(clippy::too_many_arguments)]
pub fn fire_burst<H: FlakHost + ?Sized>(
    world: &mut World,
    zone: Entity,
    epoch: u64,
    layer_altitude: f64,
    host: &mut H,
    config: &FlakConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<FlakEvent>,
) {
    let Ok((name, area, status)) =
        world.query_one_mut::<(&ZoneName, &ZoneArea, &mut ZoneStatus)>(zone)
    else {
        return;
    };

    if !status.accepts(epoch) {
        return;
    }

    if let Some(flag) = &config.hold_fire_flag {
        if host.user_flag(flag) == config.hold_fire_value {
            status.bursts_suppressed += 1;
            trace!(zone = %name.0, flag = %flag, "hold fire, burst suppressed");
            events.push(FlakEvent::BurstSuppressed {
                zone: name.0.clone(),
            });
            return;
        }
    }

    let (position, intensity) =
        generate_burst(rng, area, layer_altitude, config.vertical_jitter_m);
    host.emit_explosion(position, intensity);
    status.bursts_fired += 1;

    if config.debug_enabled {
        debug!(zone = %name.0, ?position, intensity, "burst");
    } else {
        trace!(zone = %name.0, ?position, intensity, "burst");
    }
    events.push(FlakEvent::Burst(BurstEvent {
        zone: name.0.clone(),
        position,
        intensity,
    }));
}
