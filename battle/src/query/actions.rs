//! Legal action enumeration and the simple switch policy

use crate::types::{ActionOption, BattleSnapshot, SideIndex, SideSnapshot};

/// Every legal action for a side's active creature
///
/// Attacks in the creature's listed order, then one switch per living bench
/// creature in bench order. Empty when the side has no active creature.
pub fn legal_actions(battle: &BattleSnapshot, side: SideIndex) -> Vec<ActionOption> {
    let side = battle.side(side);
    let Some(active) = side.active_creature() else {
        return Vec::new();
    };

    active
        .moves
        .iter()
        .cloned()
        .map(ActionOption::Attack)
        .chain(side.get_bench().map(|(idx, _)| ActionOption::Switch(idx)))
        .collect()
}

/// First living creature on the side, in bench order
pub fn first_switch_target(side: &SideSnapshot) -> Option<usize> {
    side.creatures.iter().position(|c| c.is_alive())
}
