//! Activation system: decides per zone whether flak should be firing.
//!
//! The only writer of `ZoneStatus::state`. Runs once per activation period
//! for every zone and re-submits itself forever.

use hecs::{Entity, World};
use tracing::info;

use flak_core::components::{ZoneArea, ZoneControl, ZoneName};
use flak_core::config::FlakConfig;
use flak_core::constants::CONTROL_FLAG_ON;
use flak_core::events::FlakEvent;
use flak_core::types::secs_to_ticks;

use crate::host::FlakHost;
use crate::tasks::{Task, TaskQueue};
use crate::zone::ZoneStatus;

/// Evaluate one zone, apply any transition, and schedule the next evaluation.
pub fn run<H: FlakHost + ?Sized>(
    world: &mut World,
    zone: Entity,
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

    let should_enable = match &control.control_flag {
        Some(flag) => host.user_flag(flag) == CONTROL_FLAG_ON,
        None => !super::contacts_over(host, area, &control.target).is_empty(),
    };

    match (status.is_enabled(), should_enable) {
        (false, true) => {
            let epoch = status.enable();
            info!(zone = %name.0, epoch, "flak zone enabled");
            events.push(FlakEvent::ZoneEnabled {
                zone: name.0.clone(),
            });
            // Same tick: the barrage runs right after this activation.
            tasks.schedule_at(now, Task::Barrage { zone, epoch });
        }
        (true, false) => {
            status.disable();
            info!(zone = %name.0, "flak zone disabled");
            events.push(FlakEvent::ZoneDisabled {
                zone: name.0.clone(),
            });
        }
        _ => {}
    }

    let period = secs_to_ticks(config.activation_period_secs).max(1);
    tasks.schedule_at(now + period, Task::Activation { zone });
}
