//! Mission evaluation against the live territory map. Read-only.

use std::collections::HashMap;

use conquest_core::state::MissionStatus;
use conquest_core::types::{Mission, Objective, Territory};

/// Territories held per owner. Unowned territories are not counted.
pub fn holdings(territories: &[Territory]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for territory in territories.iter().filter(|t| t.is_owned()) {
        *counts.entry(territory.owner.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Whether `mission` is satisfied by the current map.
///
/// `ConquerCount` is met when *any* owner reaches the target, not only the
/// player who holds the mission. With no owned territory at all it is never
/// met, whatever the target.
pub fn check_mission(mission: &Mission, territories: &[Territory]) -> bool {
    match &mission.objective {
        Objective::ConquerCount { target } => holdings(territories)
            .values()
            .any(|&count| count as i64 >= i64::from(*target)),
        Objective::EliminateOwner { owner } => territories.iter().all(|t| t.owner != *owner),
    }
}

/// Evaluate every mission, in registry order.
pub fn check_missions(missions: &[Mission], territories: &[Territory]) -> Vec<MissionStatus> {
    missions
        .iter()
        .enumerate()
        .map(|(id, mission)| MissionStatus {
            id,
            mission: mission.clone(),
            complete: check_mission(mission, territories),
        })
        .collect()
}
