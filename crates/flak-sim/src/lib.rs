//! Flak barrage engine.
//!
//! Owns the hecs zone world, runs activation and barrage tasks on a
//! fixed tick, and produces FlakSnapshots for the host.

pub mod altitude;
pub mod burst;
pub mod engine;
pub mod factory;
pub mod host;
pub mod systems;
pub mod tasks;
pub mod zone;

pub use engine::FlakEngine;
pub use flak_core as core;
pub use host::{FlakHost, ZoneDefinition, ZoneRegistry};
