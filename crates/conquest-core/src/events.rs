//! Combat events and battle outcomes reported back to the player.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// One step of a resolved battle, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// Both sides threw their dice (each sorted descending).
    DiceRolled {
        attacker: Vec<u8>,
        defender: Vec<u8>,
    },
    /// The `pair`-th highest dice were compared; the loser lost one troop.
    PairResolved {
        pair: usize,
        attacker_die: u8,
        defender_die: u8,
        winner: Side,
    },
    /// The defender fell and changed hands.
    Conquered {
        territory: String,
        new_owner: String,
        troops_moved: i32,
    },
    /// The defender held.
    BattleEnded {
        attacker_troops: i32,
        defender_troops: i32,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::DiceRolled { attacker, defender } => {
                write!(
                    f,
                    "Attacker dice: {}\nDefender dice: {}",
                    join_dice(attacker),
                    join_dice(defender)
                )
            }
            CombatEvent::PairResolved { pair, winner, .. } => {
                let loser = winner.opponent();
                write!(
                    f,
                    "{} wins clash {}: {} loses 1 troop.",
                    capitalize(winner.label()),
                    pair + 1,
                    loser.label()
                )
            }
            CombatEvent::Conquered {
                territory,
                new_owner,
                troops_moved,
            } => write!(
                f,
                "Territory {territory} conquered! Moved {troops_moved} troops. \
                 {territory} now belongs to {new_owner}."
            ),
            CombatEvent::BattleEnded {
                attacker_troops,
                defender_troops,
            } => write!(
                f,
                "Battle over. Troops now: attacker={attacker_troops}, defender={defender_troops}"
            ),
        }
    }
}

fn join_dice(dice: &[u8]) -> String {
    dice.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ownership change produced by a successful attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conquest {
    pub new_owner: String,
    pub troops_moved: i32,
}

/// Full result of one resolved attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker_rolls: Vec<u8>,
    pub defender_rolls: Vec<u8>,
    pub events: Vec<CombatEvent>,
    pub conquest: Option<Conquest>,
    /// Attacker troops after the battle (and any transfer).
    pub attacker_troops: i32,
    /// Defender troops after the battle (and any transfer).
    pub defender_troops: i32,
}

impl CombatOutcome {
    /// Number of dice pairs that were compared.
    pub fn pairs_resolved(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CombatEvent::PairResolved { .. }))
            .count()
    }

    /// Troops lost by `side` in the dice clashes (transfers excluded).
    pub fn losses(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CombatEvent::PairResolved { winner, .. } if *winner != side))
            .count()
    }

    pub fn is_conquest(&self) -> bool {
        self.conquest.is_some()
    }
}
