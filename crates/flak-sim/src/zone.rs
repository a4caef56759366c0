//! Zone runtime state and construction options.

use serde::{Deserialize, Serialize};

use flak_core::components::{TargetFilter, ZoneControl};
use flak_core::enums::{AltitudePolicy, ZoneState};

/// Runtime state of a zone entity.
///
/// `state` and `epoch` can only be changed by the activation system. Every
/// enable starts a new epoch; barrage work scheduled under an older epoch is
/// discarded when it comes due.
#[derive(Debug, Clone, Default)]
pub struct ZoneStatus {
    state: ZoneState,
    epoch: u64,
    pub bursts_fired: u64,
    pub bursts_suppressed: u64,
    pub waves_fired: u64,
    pub waves_skipped: u64,
}

impl ZoneStatus {
    pub fn state(&self) -> ZoneState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ZoneState::Enabled
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True while barrage work from `epoch` may still fire.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.is_enabled() && self.epoch == epoch
    }

    /// Switch to Enabled and open a new epoch. Returns the new epoch.
    pub(crate) fn enable(&mut self) -> u64 {
        self.state = ZoneState::Enabled;
        self.epoch += 1;
        self.epoch
    }

    pub(crate) fn disable(&mut self) {
        self.state = ZoneState::Disabled;
    }
}

/// Options for building one zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneOptions {
    pub altitude: AltitudePolicy,
    pub control_flag: Option<String>,
    pub target: TargetFilter,
}

impl ZoneOptions {
    pub fn fixed(altitude: f64) -> Self {
        Self {
            altitude: AltitudePolicy::Fixed(altitude),
            ..Default::default()
        }
    }

    pub fn dynamic() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.control_flag = Some(flag.into());
        self
    }

    pub fn with_target(mut self, target: TargetFilter) -> Self {
        self.target = target;
        self
    }

    pub(crate) fn into_control(self) -> ZoneControl {
        ZoneControl {
            control_flag: self.control_flag,
            altitude: self.altitude,
            target: self.target,
        }
    }
}

/// Bursts per altitude layer for a zone of `radius` meters. Never below 1.
pub fn burst_count(radius: f64, density_factor: f64, density_multiplier: f64) -> u32 {
    let raw = ((radius / density_factor) * density_multiplier).floor();
    if raw.is_finite() && raw >= 1.0 {
        raw.min(u32::MAX as f64) as u32
    } else {
        1
    }
}
