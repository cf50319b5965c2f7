//! Player commands sent from a front end to the game engine.
//!
//! Commands are validated by the engine and applied one at a time.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ATTACKER_DICE, MAX_DEFENDER_DICE};
use crate::events::CombatOutcome;
use crate::state::MissionStatus;
use crate::types::{Objective, Territory};

/// Raw numbers chosen for one attack.
///
/// Values are never rejected: the combat resolver clamps each one into its
/// legal range at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRequest {
    pub attacker_dice: i64,
    pub defender_dice: i64,
    /// Troops to move into the defender on conquest.
    pub transfer: i64,
}

impl Default for AttackRequest {
    fn default() -> Self {
        Self {
            attacker_dice: MAX_ATTACKER_DICE,
            defender_dice: MAX_DEFENDER_DICE,
            transfer: 1,
        }
    }
}

impl AttackRequest {
    pub fn new(attacker_dice: i64, defender_dice: i64, transfer: i64) -> Self {
        Self {
            attacker_dice,
            defender_dice,
            transfer,
        }
    }
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Territories ---
    /// Register a new territory at the end of the registry.
    RegisterTerritory {
        name: String,
        owner: String,
        troops: i32,
    },
    /// Swap-remove a territory. Invalidates the index of the last territory.
    RemoveTerritory { index: usize },

    // --- Combat ---
    /// Attack `defender` from `attacker` (registry indices).
    Attack {
        attacker: usize,
        defender: usize,
        request: AttackRequest,
    },

    // --- Missions ---
    AddMission { objective: Objective },
    /// Evaluate every mission against the current map.
    CheckMissions,
}

/// What the engine reports back after applying a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    Registered { index: usize },
    Removed { territory: Territory },
    Attacked { outcome: CombatOutcome },
    MissionAdded { index: usize },
    MissionsChecked { statuses: Vec<MissionStatus> },
}
