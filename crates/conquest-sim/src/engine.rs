//! Game engine — the single writer over the map.
//!
//! `GameEngine` owns the territory and mission registries and the dice RNG,
//! validates indices, applies player commands one at a time and produces
//! `GameStateSnapshot`s. Every mutation takes `&mut self`, so no two attacks
//! can ever be in flight together.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use conquest_core::commands::{AttackRequest, CommandOutcome, PlayerCommand};
use conquest_core::constants::{DEFAULT_MISSION_CAPACITY, DEFAULT_TERRITORY_CAPACITY};
use conquest_core::error::CommandError;
use conquest_core::events::{CombatEvent, CombatOutcome};
use conquest_core::state::{GameStateSnapshot, GameStats, MissionStatus, TerritoryView};
use conquest_core::types::{Mission, Objective, Territory};

use crate::combat;
use crate::mission;
use crate::registry::Registry;

/// Configuration for starting a new game.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same dice.
    pub seed: u64,
    /// Initial territory registry capacity.
    pub territory_capacity: usize,
    /// Initial mission registry capacity.
    pub mission_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            territory_capacity: DEFAULT_TERRITORY_CAPACITY,
            mission_capacity: DEFAULT_MISSION_CAPACITY,
        }
    }
}

/// The game engine. Owns the map, the missions and the dice.
#[derive(Debug)]
pub struct GameEngine {
    territories: Registry<Territory>,
    missions: Registry<Mission>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    stats: GameStats,
}

impl GameEngine {
    /// Create a new, empty game with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            territories: Registry::with_capacity(config.territory_capacity),
            missions: Registry::with_capacity(config.mission_capacity),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            stats: GameStats::default(),
        }
    }

    pub fn territories(&self) -> &[Territory] {
        self.territories.as_slice()
    }

    pub fn territory(&self, index: usize) -> Result<&Territory, CommandError> {
        self.territories
            .get(index)
            .map_err(|_| CommandError::InvalidTerritory(index))
    }

    pub fn missions(&self) -> &[Mission] {
        self.missions.as_slice()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    // --- Territories ---

    /// Register a territory at the end of the map. Negative troop counts
    /// are raised to zero.
    pub fn register_territory(
        &mut self,
        name: &str,
        owner: &str,
        troops: i32,
    ) -> Result<usize, CommandError> {
        let territory = Territory::new(name, owner, troops.max(0));
        let index = self.territories.push(territory)?;
        info!(index, name, owner, troops, "territory registered");
        Ok(index)
    }

    /// Swap-remove a territory. The previously last territory takes `index`.
    pub fn remove_territory(&mut self, index: usize) -> Result<Territory, CommandError> {
        let removed = self
            .territories
            .swap_remove(index)
            .map_err(|_| CommandError::InvalidTerritory(index))?;
        self.stats.territories_removed += 1;
        info!(index, name = %removed.name, "territory removed");
        Ok(removed)
    }

    // --- Combat ---

    /// Validate an attack without rolling anything. Returns the dice limits
    /// `(attacker, defender)` a front end should offer.
    pub fn prepare_attack(&self, attacker: usize, defender: usize) -> Result<(i64, i64), CommandError> {
        self.validate_pair(attacker, defender)?;
        let attacking = self.territory(attacker)?;
        let defending = self.territory(defender)?;
        combat::check_attack(attacking, defending)?;
        Ok(combat::dice_limits(attacking, defending))
    }

    /// Resolve an attack with every number chosen up front.
    pub fn attack(
        &mut self,
        attacker: usize,
        defender: usize,
        request: AttackRequest,
    ) -> Result<CombatOutcome, CommandError> {
        self.attack_with(
            attacker,
            defender,
            request.attacker_dice,
            request.defender_dice,
            |_, _| request.transfer,
        )
    }

    /// Resolve an attack, choosing the transfer only if a conquest happens.
    /// The chooser sees the dice and clash events before it answers.
    pub fn attack_with<F>(
        &mut self,
        attacker: usize,
        defender: usize,
        attacker_dice: i64,
        defender_dice: i64,
        choose_transfer: F,
    ) -> Result<CombatOutcome, CommandError>
    where
        F: FnOnce(&[CombatEvent], i64) -> i64,
    {
        self.validate_pair(attacker, defender)?;
        let (attacking, defending) = self.territories.pair_mut(attacker, defender)?;

        match combat::resolve_attack_with(
            attacking,
            defending,
            attacker_dice,
            defender_dice,
            &mut self.rng,
            choose_transfer,
        ) {
            Ok(outcome) => {
                self.stats.battles_fought += 1;
                if outcome.is_conquest() {
                    self.stats.conquests += 1;
                }
                Ok(outcome)
            }
            Err(err) => {
                self.stats.attacks_refused += 1;
                warn!(attacker, defender, %err, "attack refused");
                Err(err.into())
            }
        }
    }

    fn validate_pair(&self, attacker: usize, defender: usize) -> Result<(), CommandError> {
        let len = self.territories.len();
        if len < 2 {
            return Err(CommandError::NotEnoughTerritories(len));
        }
        for index in [attacker, defender] {
            if index >= len {
                return Err(CommandError::InvalidTerritory(index));
            }
        }
        if attacker == defender {
            return Err(CommandError::SameTerritory);
        }
        Ok(())
    }

    // --- Missions ---

    pub fn add_mission(&mut self, objective: Objective) -> Result<usize, CommandError> {
        let mission = Mission::new(objective);
        info!(description = %mission.description, "mission added");
        Ok(self.missions.push(mission)?)
    }

    pub fn check_missions(&self) -> Vec<MissionStatus> {
        mission::check_missions(self.missions.as_slice(), self.territories.as_slice())
    }

    // --- Commands ---

    /// Queue a command for the next `process_commands` call.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply all queued commands in order. A failed command does not stop
    /// the ones after it.
    pub fn process_commands(&mut self) -> Vec<Result<CommandOutcome, CommandError>> {
        let mut results = Vec::with_capacity(self.command_queue.len());
        while let Some(command) = self.command_queue.pop_front() {
            results.push(self.handle(command));
        }
        results
    }

    /// Apply a single player command.
    pub fn handle(&mut self, command: PlayerCommand) -> Result<CommandOutcome, CommandError> {
        match command {
            PlayerCommand::RegisterTerritory {
                name,
                owner,
                troops,
            } => {
                let index = self.register_territory(&name, &owner, troops)?;
                Ok(CommandOutcome::Registered { index })
            }
            PlayerCommand::RemoveTerritory { index } => {
                let territory = self.remove_territory(index)?;
                Ok(CommandOutcome::Removed { territory })
            }
            PlayerCommand::Attack {
                attacker,
                defender,
                request,
            } => {
                let outcome = self.attack(attacker, defender, request)?;
                Ok(CommandOutcome::Attacked { outcome })
            }
            PlayerCommand::AddMission { objective } => {
                let index = self.add_mission(objective)?;
                Ok(CommandOutcome::MissionAdded { index })
            }
            PlayerCommand::CheckMissions => Ok(CommandOutcome::MissionsChecked {
                statuses: self.check_missions(),
            }),
        }
    }

    /// Build a complete snapshot of the current game.
    pub fn snapshot(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            territories: self
                .territories
                .iter()
                .enumerate()
                .map(|(id, t)| TerritoryView {
                    id,
                    name: t.name.clone(),
                    owner: t.owner.clone(),
                    troops: t.troops,
                })
                .collect(),
            missions: self.check_missions(),
            stats: self.stats,
        }
    }
}
