//! Engine configuration.
//!
//! A `FlakConfig` is built once, validated, and then owned by the engine.
//! Systems only ever see it through a shared reference, so every scheduled
//! task observes the same values for the whole run.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::FlakError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlakConfig {
    /// RNG seed for determinism. Same seed = same barrage.
    pub seed: u64,
    /// Log every emitted burst at debug level.
    pub debug_enabled: bool,
    /// Host flag that suppresses all bursts while it reads `hold_fire_value`.
    pub hold_fire_flag: Option<String>,
    pub hold_fire_value: i64,
    /// Zone radius (meters) that earns one burst per layer.
    pub density_factor: f64,
    pub density_multiplier: f64,
    /// Altitude deltas applied to the center altitude, one layer each.
    pub layer_offsets: Vec<f64>,
    /// Seconds between barrage waves.
    pub interval_secs: f64,
    /// Height of one altitude bin for dynamic targeting (meters).
    pub altitude_bin_size: f64,
    /// Seconds between consecutive bursts of a wave.
    pub burst_stagger_secs: f64,
    /// Half-height of the vertical jitter band (meters).
    pub vertical_jitter_m: f64,
    /// Seconds between activation evaluations.
    pub activation_period_secs: f64,
    /// Default radius for corridor zones (meters).
    pub corridor_radius: f64,
}

impl Default for FlakConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            debug_enabled: false,
            hold_fire_flag: None,
            hold_fire_value: HOLD_FIRE_VALUE,
            density_factor: DEFAULT_DENSITY_FACTOR,
            density_multiplier: DEFAULT_DENSITY_MULTIPLIER,
            layer_offsets: DEFAULT_LAYER_OFFSETS.to_vec(),
            interval_secs: DEFAULT_INTERVAL_SECS,
            altitude_bin_size: DEFAULT_ALTITUDE_BIN_SIZE,
            burst_stagger_secs: BURST_STAGGER_SECS,
            vertical_jitter_m: VERTICAL_JITTER_M,
            activation_period_secs: ACTIVATION_PERIOD_SECS,
            corridor_radius: DEFAULT_CORRIDOR_RADIUS,
        }
    }
}

impl FlakConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, FlakError> {
        let config: FlakConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is usable by the barrage systems.
    pub fn validate(&self) -> Result<(), FlakError> {
        fn positive(name: &str, value: f64) -> Result<(), FlakError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(FlakError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }
        fn non_negative(name: &str, value: f64) -> Result<(), FlakError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(FlakError::InvalidConfig(format!(
                    "{name} must be zero or positive, got {value}"
                )))
            }
        }

        positive("density_factor", self.density_factor)?;
        non_negative("density_multiplier", self.density_multiplier)?;
        positive("interval_secs", self.interval_secs)?;
        positive("altitude_bin_size", self.altitude_bin_size)?;
        non_negative("burst_stagger_secs", self.burst_stagger_secs)?;
        non_negative("vertical_jitter_m", self.vertical_jitter_m)?;
        positive("activation_period_secs", self.activation_period_secs)?;
        positive("corridor_radius", self.corridor_radius)?;

        if self.layer_offsets.is_empty() {
            return Err(FlakError::InvalidConfig(
                "layer_offsets must contain at least one layer".into(),
            ));
        }
        if let Some(bad) = self.layer_offsets.iter().find(|o| !o.is_finite()) {
            return Err(FlakError::InvalidConfig(format!(
                "layer offset {bad} is not finite"
            )));
        }
        Ok(())
    }
}
