//! Dice sources. Every roll comes back sorted highest first.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use conquest_core::constants::DIE_FACES;

/// Anything that can throw six-sided dice.
pub trait DiceRoller {
    /// Roll `count` dice, returned sorted in descending order.
    fn roll(&mut self, count: usize) -> Vec<u8>;
}

/// Roll `count` uniform dice from `rng`, sorted descending.
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u8> {
    let mut dice: Vec<u8> = (0..count).map(|_| rng.gen_range(1..=DIE_FACES)).collect();
    sort_descending(&mut dice);
    dice
}

fn sort_descending(dice: &mut [u8]) {
    dice.sort_unstable_by(|a, b| b.cmp(a));
}

impl DiceRoller for ChaCha8Rng {
    fn roll(&mut self, count: usize) -> Vec<u8> {
        roll_dice(self, count)
    }
}

/// Replays predetermined faces in order, for reproducible battles.
///
/// Each `roll(n)` consumes the next `n` faces. Faces are clamped to 1..=6.
/// Once the script runs dry every further die shows 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, count: usize) -> Vec<u8> {
        let mut dice: Vec<u8> = (0..count)
            .map(|_| self.faces.pop_front().unwrap_or(1).clamp(1, DIE_FACES))
            .collect();
        sort_descending(&mut dice);
        dice
    }
}
