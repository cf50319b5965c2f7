//! Game state snapshot: the complete visible state of a running game.

use serde::{Deserialize, Serialize};

use crate::types::Mission;

/// Everything a front end needs to render the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub territories: Vec<TerritoryView>,
    pub missions: Vec<MissionStatus>,
    pub stats: GameStats,
}

/// A territory row as listed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryView {
    /// Current registry index. Not stable across removals.
    pub id: usize,
    pub name: String,
    pub owner: String,
    pub troops: i32,
}

/// A mission with its evaluation against the current map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStatus {
    pub id: usize,
    pub mission: Mission,
    pub complete: bool,
}

/// Running counters kept by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub battles_fought: u32,
    pub conquests: u32,
    pub attacks_refused: u32,
    pub territories_removed: u32,
}
