//! Error types for zone construction and configuration.
//!
//! Runtime barrage failures are never errors: they are skipped and reported
//! as events. Only setup operations return these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlakError {
    #[error("zone '{0}' not found in registry")]
    ZoneNotFound(String),

    #[error("zone '{0}' is already registered")]
    DuplicateZone(String),

    #[error("zone '{name}' is invalid: {reason}")]
    InvalidZone { name: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl FlakError {
    pub fn invalid_zone(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidZone {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
