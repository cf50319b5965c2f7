//! Fundamental game types: territories and missions.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NAME_LEN, MAX_OWNER_LEN};

/// A named unit of the map with an owner label and a troop count.
///
/// The owner label doubles as player identity. An empty owner means the
/// territory is unowned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: String,
    /// Troops stationed here. Signed because combat may drive a defender
    /// below zero when it was registered with no troops.
    pub troops: i32,
}

impl Territory {
    /// Create a territory, truncating labels to their field limits.
    pub fn new(name: &str, owner: &str, troops: i32) -> Self {
        Self {
            name: truncate_label(name, MAX_NAME_LEN),
            owner: truncate_label(owner, MAX_OWNER_LEN),
            troops,
        }
    }

    pub fn is_owned(&self) -> bool {
        !self.owner.is_empty()
    }

    /// Hand this territory to `owner` with `troops` stationed.
    ///
    /// Owner and troop count always change together.
    pub fn transfer_to(&mut self, owner: &str, troops: i32) {
        self.owner = truncate_label(owner, MAX_OWNER_LEN);
        self.troops = troops;
    }
}

/// What a mission asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Objective {
    /// Some single owner holds at least `target` territories.
    ConquerCount { target: i32 },
    /// No territory is held by `owner` any more.
    EliminateOwner { owner: String },
}

impl Objective {
    pub fn conquer_count(target: i32) -> Self {
        Objective::ConquerCount { target }
    }

    pub fn eliminate_owner(owner: &str) -> Self {
        Objective::EliminateOwner {
            owner: truncate_label(owner, MAX_OWNER_LEN),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Objective::ConquerCount { target } => format!("Hold {target} territories"),
            Objective::EliminateOwner { owner } => format!("Eliminate owner {owner}"),
        }
    }
}

/// A victory condition. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub objective: Objective,
    pub description: String,
}

impl Mission {
    pub fn new(objective: Objective) -> Self {
        let description = objective.describe();
        Self {
            objective,
            description,
        }
    }
}

/// Cut `label` down to at most `max` characters, never splitting a char.
pub fn truncate_label(label: &str, max: usize) -> String {
    match label.char_indices().nth(max) {
        Some((byte_idx, _)) => label[..byte_idx].to_string(),
        None => label.to_string(),
    }
}
