//! Rules engine for CONQUEST.
//!
//! Dice rolling, combat resolution, mission evaluation and the registries
//! that hold the map, wired together by `GameEngine`. Completely headless,
//! enabling deterministic testing from a seed.

pub mod combat;
pub mod dice;
pub mod engine;
pub mod mission;
pub mod registry;

pub use conquest_core as core;
pub use engine::{GameEngine, SimConfig};
