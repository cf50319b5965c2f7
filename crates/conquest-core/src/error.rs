//! Error taxonomy for combat, registries and command handling.

use thiserror::Error;

/// Reasons an attack is refused before any dice are rolled.
///
/// A refused attack leaves both territories untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("attack impossible: the attacking territory needs at least 2 troops (has {troops})")]
    InsufficientTroops { troops: i32 },

    #[error("invalid attack: both territories belong to the same player ({owner})")]
    SameOwner { owner: String },
}

/// Failures of the index-validated registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("index {0} requested twice")]
    SameIndex(usize),

    #[error("allocation failure growing registry to {requested} slots")]
    AllocationFailure { requested: usize },
}

/// Failures surfaced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("at least 2 territories are required (have {0})")]
    NotEnoughTerritories(usize),

    #[error("invalid territory id {0}")]
    InvalidTerritory(usize),

    #[error("attacker and defender must be different territories")]
    SameTerritory,

    #[error(transparent)]
    Attack(#[from] AttackError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl CommandError {
    /// Whether the process cannot reasonably continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CommandError::Registry(RegistryError::AllocationFailure { .. })
        )
    }
}
