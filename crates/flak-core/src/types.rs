//! Fundamental geometric and simulation types.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// 3D position in mission space (meters, Cartesian).
/// x = East, y = North, z = Up (altitude).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Ground point at altitude zero.
    pub fn ground(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Range to another position in meters (3D distance).
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_dvec3().distance(other.as_dvec3())
    }

    /// Horizontal range (ignoring altitude).
    pub fn horizontal_range_to(&self, other: &Position) -> f64 {
        self.horizontal().distance(other.horizontal())
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        self.as_dvec3().lerp(other.as_dvec3(), t).into()
    }

    /// Same horizontal point at a different altitude.
    pub fn with_altitude(&self, z: f64) -> Position {
        Position { z, ..*self }
    }

    pub fn horizontal(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.as_dvec3().is_finite()
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}

/// Convert a duration in seconds to whole ticks, rounding to the nearest tick.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * crate::constants::TICK_RATE as f64).round().max(0.0) as u64
}
