//! Type matchup helpers for decision making

use crate::types::{CreatureSnapshot, MoveSnapshot};

/// Whether `attacker`'s primary type is super effective against `defender`'s
/// primary type
///
/// One-directional and primary-type only; secondary types are ignored.
pub fn is_super_effective(attacker: &CreatureSnapshot, defender: &CreatureSnapshot) -> bool {
    attacker
        .primary_type
        .is_super_effective_against(defender.primary_type)
}

/// Damage modifier of a move against a creature's primary and (if present)
/// secondary type
pub fn matchup_multiplier(attack: &MoveSnapshot, target: &CreatureSnapshot) -> f64 {
    let mut modifier = attack.move_type.effectiveness(target.primary_type);
    if let Some(secondary) = target.secondary_type {
        modifier *= attack.move_type.effectiveness(secondary);
    }
    modifier
}
