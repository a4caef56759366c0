//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Control state of a flak zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneState {
    /// Not firing. Initial state of every zone.
    #[default]
    Disabled,
    /// Barrage running.
    Enabled,
}

/// How a zone picks the altitude it fires at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "altitude")]
pub enum AltitudePolicy {
    /// Always fire around this altitude (meters).
    Fixed(f64),
    /// Fire at the dominant altitude of the aircraft over the zone.
    #[default]
    Dynamic,
}

/// Coalition a contact belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coalition {
    Neutral,
    Red,
    #[default]
    Blue,
}

/// Aircraft category used when querying host contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    Airplane,
    Helicopter,
}

/// Why a barrage wave produced no bursts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Dynamic altitude requested but no contacts were over the zone.
    NoAltitudeEstimate,
}
