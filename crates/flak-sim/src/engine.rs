//! Flak engine: owns the zone world and the task queue.
//!
//! `FlakEngine` is driven by the host calling `tick` at `TICK_RATE`. Each
//! tick advances the clock and runs every task that has come due, then
//! returns a `FlakSnapshot`. The engine keeps no host state between ticks,
//! so the same seed and host script always replay the same bursts.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flak_core::config::FlakConfig;
use flak_core::error::FlakError;
use flak_core::events::FlakEvent;
use flak_core::state::FlakSnapshot;
use flak_core::types::SimTime;

use crate::host::FlakHost;
use crate::systems;
use crate::tasks::{Task, TaskQueue};
use crate::zone::ZoneStatus;

/// The flak engine. Owns the zone world and all barrage state.
pub struct FlakEngine {
    pub(crate) world: World,
    pub(crate) time: SimTime,
    pub(crate) config: FlakConfig,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) tasks: TaskQueue,
    /// Lowercase zone name to entity.
    pub(crate) zone_index: HashMap<String, Entity>,
    events: Vec<FlakEvent>,
}

impl FlakEngine {
    /// Create an engine with a validated config.
    pub fn new(config: FlakConfig) -> Result<Self, FlakError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            tasks: TaskQueue::new(),
            zone_index: HashMap::new(),
            events: Vec::new(),
        })
    }

    /// Advance by one tick, run due tasks, and return the resulting snapshot.
    pub fn tick<H: FlakHost + ?Sized>(&mut self, host: &mut H) -> FlakSnapshot {
        self.time.advance();
        self.run_due_tasks(host);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Tick until `secs` of simulated time have passed. Returns every
    /// snapshot produced along the way.
    pub fn run_for<H: FlakHost + ?Sized>(&mut self, host: &mut H, secs: f64) -> Vec<FlakSnapshot> {
        let ticks = flak_core::types::secs_to_ticks(secs);
        let mut snapshots = Vec::with_capacity(ticks as usize);
        for _ in 0..ticks {
            snapshots.push(self.tick(&mut *host));
        }
        snapshots
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &FlakConfig {
        &self.config
    }

    /// Get a read-only reference to the zone world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pending_tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    pub fn zone(&self, name: &str) -> Option<Entity> {
        self.zone_index.get(&name.to_lowercase()).copied()
    }

    pub fn zone_count(&self) -> usize {
        self.zone_index.len()
    }

    /// Runtime status of a zone by name.
    pub fn zone_status(&self, name: &str) -> Option<ZoneStatus> {
        let entity = self.zone(name)?;
        self.world
            .get::<&ZoneStatus>(entity)
            .ok()
            .map(|status| (*status).clone())
    }

    /// Names of all managed zones, sorted.
    pub fn zone_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .world
            .query::<&flak_core::components::ZoneName>()
            .iter()
            .map(|(_, name)| name.0.clone())
            .collect();
        names.sort();
        names
    }

    /// Pop and dispatch tasks until nothing more is due this tick.
    fn run_due_tasks<H: FlakHost + ?Sized>(&mut self, host: &mut H) {
        let now = self.time.tick;
        while let Some(task) = self.tasks.pop_due(now) {
            match task {
                Task::Activation { zone } => systems::activation::run(
                    &mut self.world,
                    zone,
                    &*host,
                    &self.config,
                    &mut self.tasks,
                    now,
                    &mut self.events,
                ),
                Task::Barrage { zone, epoch } => systems::barrage::run_wave(
                    &mut self.world,
                    zone,
                    epoch,
                    &*host,
                    &self.config,
                    &mut self.tasks,
                    now,
                    &mut self.events,
                ),
                Task::Burst {
                    zone,
                    epoch,
                    layer_altitude,
                } => systems::barrage::fire_burst(
                    &mut self.world,
                    zone,
                    epoch,
                    layer_altitude,
                    &mut *host,
                    &self.config,
                    &mut self.rng,
                    &mut self.events,
                ),
            }
        }
    }
}
