//! Zone factories: explicit zones, prefix scans, and corridors.
//!
//! Every factory path ends in `FlakEngine::add_zone_at`, which spawns the
//! zone entity and schedules its first activation for the next tick.

use hecs::Entity;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use flak_core::components::{ZoneArea, ZoneControl, ZoneName};
use flak_core::constants::MAX_CORRIDOR_ZONES;
use flak_core::enums::AltitudePolicy;
use flak_core::error::FlakError;
use flak_core::types::Position;

use crate::engine::FlakEngine;
use crate::host::{FlakHost, ZoneDefinition};
use crate::tasks::Task;
use crate::zone::{ZoneOptions, ZoneStatus};

/// Options for `scan_zones_by_prefix`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub zone: ZoneOptions,
    /// Per-zone control flags `flag_prefix + ordinal`. Each created zone
    /// takes the next number after the highest one already in use for the
    /// prefix. Overrides `zone.control_flag`.
    pub flag_prefix: Option<String>,
}

/// Corridor endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    /// Center of a registered zone.
    Zone(String),
    Point(Position),
}

/// Options for `build_corridor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorOptions {
    /// Generated zones are named `name_prefix + ordinal`, 1-based.
    pub name_prefix: String,
    /// Radius of each corridor zone; the config default when unset.
    pub radius: Option<f64>,
    pub zone: ZoneOptions,
    pub flag_prefix: Option<String>,
}

impl Default for CorridorOptions {
    fn default() -> Self {
        Self {
            name_prefix: "Corridor-".into(),
            radius: None,
            zone: ZoneOptions::default(),
            flag_prefix: None,
        }
    }
}

/// Zone options for the `ordinal`-th zone of a batch.
fn numbered_options(base: &ZoneOptions, flag_prefix: Option<&str>, ordinal: usize) -> ZoneOptions {
    let mut options = base.clone();
    if let Some(prefix) = flag_prefix {
        options.control_flag = Some(format!("{prefix}{ordinal}"));
    }
    options
}

/// Evenly spaced centers from `start` to `end`, both included.
///
/// `segments = max(1, floor(distance / spacing_m))` over the horizontal
/// distance; altitude is interpolated along with x and y. Callers bound the
/// length with `corridor_len` first.
pub fn corridor_centers(start: &Position, end: &Position, spacing_m: f64) -> Vec<Position> {
    let segments = corridor_segments(start, end, spacing_m);
    (0..=segments)
        .map(|i| start.lerp(end, i as f64 / segments as f64))
        .collect()
}

/// Number of centers `corridor_centers` yields for these endpoints.
pub fn corridor_len(start: &Position, end: &Position, spacing_m: f64) -> u64 {
    corridor_segments(start, end, spacing_m).saturating_add(1)
}

fn corridor_segments(start: &Position, end: &Position, spacing_m: f64) -> u64 {
    let distance = start.horizontal_range_to(end);
    ((distance / spacing_m).floor() as u64).max(1)
}

/// Numeric suffix of `flag` after `prefix`, if it is exactly that.
fn flag_ordinal(flag: &str, prefix: &str) -> Option<usize> {
    flag.strip_prefix(prefix)?.parse().ok()
}

impl FlakEngine {
    /// Build a zone from the host registry entry called `name`.
    pub fn add_zone<H: FlakHost + ?Sized>(
        &mut self,
        name: &str,
        options: ZoneOptions,
        host: &H,
    ) -> Result<Entity, FlakError> {
        let definition = host.lookup_zone(name).ok_or_else(|| {
            warn!(zone = %name, "zone lookup failed");
            FlakError::ZoneNotFound(name.to_string())
        })?;
        self.add_zone_at(name, definition.center, definition.radius, options)
    }

    /// Build a zone from explicit geometry and start its activation loop.
    pub fn add_zone_at(
        &mut self,
        name: &str,
        center: Position,
        radius: f64,
        options: ZoneOptions,
    ) -> Result<Entity, FlakError> {
        if let Err(err) = self.check_new_zone(name, &center, radius, &options) {
            warn!(zone = %name, error = %err, "zone rejected");
            return Err(err);
        }

        let entity = self.world.spawn((
            ZoneName(name.to_string()),
            ZoneArea { center, radius },
            options.into_control(),
            ZoneStatus::default(),
        ));
        self.zone_index.insert(name.to_lowercase(), entity);
        self.tasks
            .schedule_at(self.time.tick, Task::Activation { zone: entity });

        info!(zone = %name, x = center.x, y = center.y, radius, "flak zone created");
        Ok(entity)
    }

    /// Build a zone for every registry name starting with `prefix`
    /// (case-insensitive). Names already managed are skipped, so repeating a
    /// scan is harmless. Returns the number of zones newly created.
    ///
    /// With a `flag_prefix`, only zones this scan creates are numbered, so a
    /// zone registered between two scans never shares a flag with an
    /// existing one.
    pub fn scan_zones_by_prefix<H: FlakHost + ?Sized>(
        &mut self,
        prefix: &str,
        options: &ScanOptions,
        host: &H,
    ) -> usize {
        let needle = prefix.to_lowercase();
        let mut matches: Vec<String> = host
            .zone_names()
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .collect();
        matches.sort_by_key(|name| name.to_lowercase());

        let flag_prefix = options.flag_prefix.as_deref();
        let mut ordinal = flag_prefix.map_or(0, |prefix| self.highest_flag_ordinal(prefix)) + 1;
        let mut created = 0;
        for name in &matches {
            if self.zone(name).is_some() {
                debug!(zone = %name, "already managed, skipped");
                continue;
            }
            let zone_options = numbered_options(&options.zone, flag_prefix, ordinal);
            // Failures are logged by add_zone.
            if self.add_zone(name, zone_options, host).is_ok() {
                created += 1;
                ordinal += 1;
            }
        }

        info!(prefix, matched = matches.len(), created, "prefix scan complete");
        created
    }

    /// Lay a line of zones between two anchors, registering each one with
    /// the host. Returns the number of zones created.
    ///
    /// A zone is only registered once it has passed validation, and a
    /// corridor longer than `MAX_CORRIDOR_ZONES` is refused outright.
    pub fn build_corridor<H: FlakHost + ?Sized>(
        &mut self,
        start: &Anchor,
        end: &Anchor,
        spacing_m: f64,
        options: &CorridorOptions,
        host: &mut H,
    ) -> usize {
        if !(spacing_m.is_finite() && spacing_m > 0.0) {
            warn!(spacing_m, "corridor spacing must be positive");
            return 0;
        }
        let (Some(from), Some(to)) = (resolve_anchor(start, &*host), resolve_anchor(end, &*host))
        else {
            warn!(?start, ?end, "corridor anchor not found");
            return 0;
        };
        let len = corridor_len(&from, &to, spacing_m);
        if len > MAX_CORRIDOR_ZONES as u64 {
            warn!(spacing_m, zones = len, max = MAX_CORRIDOR_ZONES, "corridor too long, refused");
            return 0;
        }
        let radius = options.radius.unwrap_or(self.config.corridor_radius);

        let mut created = 0;
        for (index, center) in corridor_centers(&from, &to, spacing_m).into_iter().enumerate() {
            let ordinal = index + 1;
            let name = format!("{}{}", options.name_prefix, ordinal);
            let zone_options = numbered_options(&options.zone, options.flag_prefix.as_deref(), ordinal);
            if let Err(err) = self.check_new_zone(&name, &center, radius, &zone_options) {
                warn!(zone = %name, error = %err, "corridor zone rejected");
                continue;
            }
            if let Err(err) = host.register_zone(&name, ZoneDefinition { center, radius }) {
                warn!(zone = %name, error = %err, "corridor zone not registered");
                continue;
            }
            if self.add_zone_at(&name, center, radius, zone_options).is_ok() {
                created += 1;
            }
        }

        info!(prefix = %options.name_prefix, spacing_m, created, "corridor built");
        created
    }

    /// Highest `N` among managed zones whose control flag is `prefix + N`.
    fn highest_flag_ordinal(&self, prefix: &str) -> usize {
        self.world
            .query::<&ZoneControl>()
            .iter()
            .filter_map(|(_, control)| flag_ordinal(control.control_flag.as_deref()?, prefix))
            .max()
            .unwrap_or(0)
    }

    fn check_new_zone(
        &self,
        name: &str,
        center: &Position,
        radius: f64,
        options: &ZoneOptions,
    ) -> Result<(), FlakError> {
        if name.trim().is_empty() {
            return Err(FlakError::invalid_zone(name, "name is empty"));
        }
        if self.zone(name).is_some() {
            return Err(FlakError::DuplicateZone(name.to_string()));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(FlakError::invalid_zone(
                name,
                format!("radius must be positive, got {radius}"),
            ));
        }
        if !center.is_finite() {
            return Err(FlakError::invalid_zone(name, "center is not finite"));
        }
        if let AltitudePolicy::Fixed(altitude) = options.altitude {
            if !altitude.is_finite() {
                return Err(FlakError::invalid_zone(name, "fixed altitude is not finite"));
            }
        }
        Ok(())
    }
}

fn resolve_anchor<H: FlakHost + ?Sized>(anchor: &Anchor, host: &H) -> Option<Position> {
    match anchor {
        Anchor::Point(position) => Some(*position),
        Anchor::Zone(name) => host.lookup_zone(name).map(|def| def.center),
    }
}
