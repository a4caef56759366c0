//! Core types and definitions for the flak barrage simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, configuration, events, snapshots, errors, and constants.
//! It has no dependency on any host or runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
