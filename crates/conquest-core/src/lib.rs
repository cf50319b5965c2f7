//! Core types and definitions for the CONQUEST simulator.
//!
//! This crate defines the vocabulary shared across the workspace:
//! territories, missions, commands, combat events, errors, snapshots
//! and constants. It owns no RNG and performs no I/O.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
