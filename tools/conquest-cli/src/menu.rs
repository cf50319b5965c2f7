//! The text menu loop. Every action runs to completion before the next
//! choice is read.

use std::io::{self, BufRead, Write};

use conquest_core::error::CommandError;
use conquest_core::events::CombatEvent;
use conquest_core::types::Objective;
use conquest_sim::GameEngine;

use crate::error::CliError;
use crate::prompt::{NumberInput, Prompter};

const MENU: &str = "\n--- MENU ---\n\
    1 - Register territory\n\
    2 - List territories\n\
    3 - Simulate attack\n\
    4 - Add mission\n\
    5 - List missions\n\
    6 - Check missions (victory)\n\
    7 - Remove territory\n\
    0 - Exit";

/// Run the menu until the player exits or input closes.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    loop {
        p.say(MENU)?;
        let choice = match p.ask_number("Choice: ")? {
            NumberInput::Eof | NumberInput::Value(0) => return Ok(()),
            NumberInput::Invalid => {
                p.say("Invalid input.")?;
                continue;
            }
            NumberInput::Value(n) => n,
        };

        match choice {
            1 => register_territory(engine, p)?,
            2 => list_territories(engine, p)?,
            3 => attack(engine, p)?,
            4 => add_mission(engine, p)?,
            5 => list_missions(engine, p)?,
            6 => check_missions(engine, p)?,
            7 => remove_territory(engine, p)?,
            _ => p.say("Invalid option.")?,
        }
    }
}

/// Say goodbye. The session is already over, so a failed write is only logged.
pub fn farewell<R: BufRead, W: Write>(p: &mut Prompter<R, W>) {
    if let Err(err) = p.say("Exiting...") {
        tracing::warn!(%err, "could not write farewell");
    }
}

/// Print a recoverable error, or escalate a fatal one.
fn report<R: BufRead, W: Write>(p: &mut Prompter<R, W>, err: CommandError) -> Result<(), CliError> {
    if err.is_fatal() {
        return Err(CliError::Fatal(err));
    }
    p.say(capitalize_first(&err.to_string()))?;
    Ok(())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a registry index typed by the player. Negative numbers never match.
fn as_index(input: NumberInput) -> Option<usize> {
    match input {
        NumberInput::Value(n) => usize::try_from(n).ok(),
        NumberInput::Invalid | NumberInput::Eof => None,
    }
}

fn register_territory<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let Some(name) = p.ask_line("Territory name: ")? else {
        return Ok(());
    };
    let Some(owner) = p.ask_line("Owner/color: ")? else {
        return Ok(());
    };
    let troops = p
        .ask_number("Number of troops: ")?
        .or(1)
        .clamp(0, i64::from(i32::MAX)) as i32;

    match engine.register_territory(&name, &owner, troops) {
        Ok(index) => p.say(format!("Territory registered with ID {index}"))?,
        Err(err) => report(p, err)?,
    }
    Ok(())
}

fn list_territories<R: BufRead, W: Write>(
    engine: &GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let snapshot = engine.snapshot();
    if snapshot.territories.is_empty() {
        p.say("No territories registered.")?;
        return Ok(());
    }
    p.say("ID  | Name                          | Owner             | Troops")?;
    p.say("----+-------------------------------+-------------------+--------")?;
    for t in &snapshot.territories {
        p.say(format!(
            "{:<3} | {:<29} | {:<17} | {:<6}",
            t.id, t.name, t.owner, t.troops
        ))?;
    }
    Ok(())
}

fn attack<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    if engine.territories().len() < 2 {
        p.say("At least 2 territories are required.")?;
        return Ok(());
    }
    list_territories(engine, p)?;

    let attacker = as_index(p.ask_number("Attacker ID: ")?);
    let defender = as_index(p.ask_number("Defender ID: ")?);
    let (Some(attacker), Some(defender)) = (attacker, defender) else {
        p.say("Invalid IDs.")?;
        return Ok(());
    };

    let (attacker_max, defender_max) = match engine.prepare_attack(attacker, defender) {
        Ok(limits) => limits,
        Err(err) => return report(p, err),
    };

    {
        let a = &engine.territories()[attacker];
        let d = &engine.territories()[defender];
        p.say(format!(
            "Troops (attacker {}): {}  |  Troops (defender {}): {}",
            a.name, a.troops, d.name, d.troops
        ))?;
    }

    let attacker_dice = match p.ask_number(&format!(
        "How many dice will the attacker use? (1-{attacker_max}): "
    ))? {
        NumberInput::Value(n) => n,
        NumberInput::Invalid | NumberInput::Eof => {
            p.say("Invalid input.")?;
            return Ok(());
        }
    };
    let defender_dice = match p.ask_number(&format!(
        "How many dice will the defender use? (1-{defender_max}): "
    ))? {
        NumberInput::Value(n) => n,
        NumberInput::Invalid | NumberInput::Eof => {
            p.say("Invalid input.")?;
            return Ok(());
        }
    };

    // The dice and clashes are printed from inside the chooser so the player
    // sees them before picking a transfer; `shown` marks how many went out.
    let mut shown = 0;
    let mut io_error = None;
    let result = engine.attack_with(
        attacker,
        defender,
        attacker_dice,
        defender_dice,
        |so_far, max| {
            shown = so_far.len();
            let asked = show_events(p, so_far)
                .and_then(|()| p.say("The defender has fallen!"))
                .and_then(|()| {
                    p.ask_number(&format!(
                        "How many troops to move into the conquered territory? (1-{max}): "
                    ))
                });
            match asked {
                Ok(input) => input.or(1),
                // The conquest still commits with one troop; the error ends
                // the session once the engine hands control back.
                Err(err) => {
                    io_error = Some(err);
                    1
                }
            }
        },
    );
    if let Some(err) = io_error {
        if let Ok(outcome) = &result {
            tracing::warn!(
                attacker,
                defender,
                attacker_troops = outcome.attacker_troops,
                defender_troops = outcome.defender_troops,
                %err,
                "transfer prompt failed, conquest committed with 1 troop"
            );
        }
        return Err(err.into());
    }

    match result {
        Ok(outcome) => show_events(p, outcome.events.get(shown..).unwrap_or_default())?,
        Err(err) => report(p, err)?,
    }
    Ok(())
}

fn show_events<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    events: &[CombatEvent],
) -> io::Result<()> {
    for event in events {
        p.say(event.to_string())?;
    }
    Ok(())
}

fn add_mission<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    p.say("Mission type:\n1 - Conquer X territories\n2 - Destroy owner/color")?;
    let objective = match p.ask_number("Choice: ")? {
        NumberInput::Value(1) => {
            match p.ask_number("How many territories must be held to win? ")? {
                NumberInput::Value(n) => {
                    Objective::conquer_count(n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
                }
                NumberInput::Invalid | NumberInput::Eof => {
                    p.say("Invalid input.")?;
                    return Ok(());
                }
            }
        }
        NumberInput::Value(_) => {
            let Some(owner) = p.ask_line("Owner/color to destroy: ")? else {
                return Ok(());
            };
            Objective::eliminate_owner(&owner)
        }
        NumberInput::Invalid | NumberInput::Eof => {
            p.say("Invalid input.")?;
            return Ok(());
        }
    };

    match engine.add_mission(objective) {
        Ok(index) => {
            let description = &engine.missions()[index].description;
            p.say(format!("Mission added: {description}"))?;
        }
        Err(err) => report(p, err)?,
    }
    Ok(())
}

fn list_missions<R: BufRead, W: Write>(
    engine: &GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    if engine.missions().is_empty() {
        p.say("No missions registered.")?;
        return Ok(());
    }
    for (i, mission) in engine.missions().iter().enumerate() {
        p.say(format!("{i}) {}", mission.description))?;
    }
    Ok(())
}

fn check_missions<R: BufRead, W: Write>(
    engine: &GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let statuses = engine.check_missions();
    if statuses.is_empty() {
        p.say("No missions registered.")?;
        return Ok(());
    }
    for status in &statuses {
        p.say(format!(
            "Mission {} ({}): {}",
            status.id,
            status.mission.description,
            if status.complete {
                "COMPLETE"
            } else {
                "NOT COMPLETE"
            }
        ))?;
    }
    Ok(())
}

fn remove_territory<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    p: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    list_territories(engine, p)?;
    let Some(index) = as_index(p.ask_number("ID to remove: ")?) else {
        p.say("Invalid ID.")?;
        return Ok(());
    };
    match engine.remove_territory(index) {
        Ok(_) => p.say("Territory removed.")?,
        Err(CommandError::InvalidTerritory(_)) => p.say("Invalid ID.")?,
        Err(err) => report(p, err)?,
    }
    Ok(())
}
