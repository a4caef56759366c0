//! Simulation constants and default tuning values.

/// Engine tick rate (Hz). One tick is the finest scheduling granularity.
pub const TICK_RATE: u32 = 10;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Activation ---

/// Period between zone activation evaluations (seconds).
pub const ACTIVATION_PERIOD_SECS: f64 = 1.0;

/// Flag value that enables a flag-controlled zone.
pub const CONTROL_FLAG_ON: i64 = 1;

// --- Barrage ---

/// Default period between barrage waves (seconds).
pub const DEFAULT_INTERVAL_SECS: f64 = 5.0;

/// Delay between consecutive bursts of one wave (seconds).
pub const BURST_STAGGER_SECS: f64 = 0.1;

/// Half-height of the vertical jitter band around a layer altitude (meters).
pub const VERTICAL_JITTER_M: f64 = 50.0;

/// Zone radius covered by one burst per layer before the multiplier (meters).
pub const DEFAULT_DENSITY_FACTOR: f64 = 1000.0;

/// Scales the per-layer burst count.
pub const DEFAULT_DENSITY_MULTIPLIER: f64 = 1.0;

/// Default altitude layers relative to the center altitude (meters).
pub const DEFAULT_LAYER_OFFSETS: [f64; 3] = [-300.0, 0.0, 300.0];

/// Lowest and highest explosion intensity passed to the host.
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 3;

// --- Altitude estimation ---

/// Default altitude bin height for the dominant-altitude estimator (meters).
pub const DEFAULT_ALTITUDE_BIN_SIZE: f64 = 500.0;

// --- Hold fire ---

/// Flag value meaning "hold fire" when a hold-fire flag is configured.
pub const HOLD_FIRE_VALUE: i64 = 1;

// --- Corridors ---

/// Default radius of synthetic corridor zones (meters).
pub const DEFAULT_CORRIDOR_RADIUS: f64 = 800.0;

/// Most zones a single corridor may lay down.
pub const MAX_CORRIDOR_ZONES: usize = 256;

// --- Determinism ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
