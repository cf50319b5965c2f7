//! Combat resolution: dice pairing, troop losses, conquest and transfer.
//!
//! The resolver mutates its two territories in place. It may change the
//! `troops` of both and the `owner` of the defender, nothing else. A refused
//! attack mutates nothing and consumes no dice.

use tracing::{debug, info};

use conquest_core::commands::AttackRequest;
use conquest_core::constants::*;
use conquest_core::enums::Side;
use conquest_core::error::AttackError;
use conquest_core::events::{CombatEvent, CombatOutcome, Conquest};
use conquest_core::types::Territory;

use crate::dice::DiceRoller;

/// Upper bounds on the dice each side may throw: `(attacker, defender)`.
///
/// The attacker keeps one troop home; the defender cannot throw more dice
/// than it has troops. Both bounds are at least 1.
pub fn dice_limits(attacker: &Territory, defender: &Territory) -> (i64, i64) {
    let attacker_max = (i64::from(attacker.troops) - 1).min(MAX_ATTACKER_DICE);
    let defender_max = i64::from(defender.troops).min(MAX_DEFENDER_DICE);
    (attacker_max.max(1), defender_max.max(1))
}

/// Upper bound on troops moved into a conquered territory. Always at least 1.
pub fn transfer_limit(attacker: &Territory) -> i64 {
    (i64::from(attacker.troops) - 1).max(1)
}

/// Check the two refusal rules, in order.
pub fn check_attack(attacker: &Territory, defender: &Territory) -> Result<(), AttackError> {
    if attacker.troops < MIN_ATTACKING_TROOPS {
        return Err(AttackError::InsufficientTroops {
            troops: attacker.troops,
        });
    }
    if attacker.owner == defender.owner {
        return Err(AttackError::SameOwner {
            owner: attacker.owner.clone(),
        });
    }
    Ok(())
}

/// Resolve an attack with every number fixed up front.
pub fn resolve_attack<D: DiceRoller + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    request: AttackRequest,
    dice: &mut D,
) -> Result<CombatOutcome, AttackError> {
    resolve_attack_with(
        attacker,
        defender,
        request.attacker_dice,
        request.defender_dice,
        dice,
        |_, _| request.transfer,
    )
}

/// Resolve an attack, asking `choose_transfer` for the troops to move only
/// once a conquest has happened.
///
/// The chooser receives the events so far (the dice and every clash) and the
/// largest legal transfer. Its answer is clamped into `[1, max]`.
pub fn resolve_attack_with<D, F>(
    attacker: &mut Territory,
    defender: &mut Territory,
    attacker_dice: i64,
    defender_dice: i64,
    dice: &mut D,
    choose_transfer: F,
) -> Result<CombatOutcome, AttackError>
where
    D: DiceRoller + ?Sized,
    F: FnOnce(&[CombatEvent], i64) -> i64,
{
    check_attack(attacker, defender)?;

    let (attacker_max, defender_max) = dice_limits(attacker, defender);
    let attacker_count = attacker_dice.clamp(1, attacker_max) as usize;
    let defender_count = defender_dice.clamp(1, defender_max) as usize;

    let attacker_rolls = dice.roll(attacker_count);
    let defender_rolls = dice.roll(defender_count);
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        ?attacker_rolls,
        ?defender_rolls,
        "dice rolled"
    );

    let mut events = vec![CombatEvent::DiceRolled {
        attacker: attacker_rolls.clone(),
        defender: defender_rolls.clone(),
    }];

    // zip stops at the shorter side; unpaired dice do nothing.
    for (pair, (&attacker_die, &defender_die)) in
        attacker_rolls.iter().zip(&defender_rolls).enumerate()
    {
        let winner = if attacker_die > defender_die {
            defender.troops -= 1;
            Side::Attacker
        } else {
            attacker.troops -= 1;
            Side::Defender
        };
        events.push(CombatEvent::PairResolved {
            pair,
            attacker_die,
            defender_die,
            winner,
        });
    }

    // Only the defender can fall. An attacker worn down to zero keeps its owner.
    let conquest = if defender.troops <= 0 {
        let max_transfer = transfer_limit(attacker);
        let moved = choose_transfer(&events, max_transfer).clamp(1, max_transfer) as i32;
        attacker.troops -= moved;
        defender.transfer_to(&attacker.owner, moved);
        info!(
            territory = %defender.name,
            new_owner = %defender.owner,
            moved,
            "territory conquered"
        );
        events.push(CombatEvent::Conquered {
            territory: defender.name.clone(),
            new_owner: defender.owner.clone(),
            troops_moved: moved,
        });
        Some(Conquest {
            new_owner: defender.owner.clone(),
            troops_moved: moved,
        })
    } else {
        events.push(CombatEvent::BattleEnded {
            attacker_troops: attacker.troops,
            defender_troops: defender.troops,
        });
        None
    };

    Ok(CombatOutcome {
        attacker_rolls,
        defender_rolls,
        events,
        conquest,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
    })
}
