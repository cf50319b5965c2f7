//! Rules constants and registry tuning parameters.

// --- Labels ---

/// Maximum territory name length in characters.
pub const MAX_NAME_LEN: usize = 63;

/// Maximum owner label length in characters.
pub const MAX_OWNER_LEN: usize = 31;

// --- Dice ---

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Most dice an attacker may throw in one battle.
pub const MAX_ATTACKER_DICE: i64 = 3;

/// Most dice a defender may throw in one battle.
pub const MAX_DEFENDER_DICE: i64 = 2;

/// Troops an attacking territory needs before it may attack.
/// One troop always stays behind.
pub const MIN_ATTACKING_TROOPS: i32 = 2;

// --- Registry ---

/// Initial territory registry capacity. Doubles when full.
pub const DEFAULT_TERRITORY_CAPACITY: usize = 4;

/// Initial mission registry capacity. Doubles when full.
pub const DEFAULT_MISSION_CAPACITY: usize = 2;
