//! Cheap one-step scoring of a candidate action

use foresight_battle::query::matchup_multiplier;
use foresight_battle::{ActionOption, CreatureSnapshot, EffectCategory, MoveSnapshot};

const INACCURATE_PENALTY: f64 = 0.7;
const CRIT_WEIGHT: f64 = 0.5;

/// Immediate value of an action against the opponent's active creature
///
/// Switches, and any action without a target, score 0.
pub fn score(action: &ActionOption, target: Option<&CreatureSnapshot>) -> f64 {
    match (action, target) {
        (ActionOption::Attack(attack), Some(target)) => score_move(attack, target),
        _ => 0.0,
    }
}

fn score_move(attack: &MoveSnapshot, target: &CreatureSnapshot) -> f64 {
    let Some(power) = attack.power else {
        return status_value(attack.effect);
    };

    let effectiveness = matchup_multiplier(attack, target);
    let accuracy_penalty = if attack.accuracy < 100 {
        INACCURATE_PENALTY
    } else {
        1.0
    };
    let crit_bonus = 1.0 + attack.critical_hit_ratio * CRIT_WEIGHT;

    effectiveness * (power as f64 / 100.0) * accuracy_penalty * crit_bonus * 100.0
}

/// Fixed strategic value of a move without base power
pub fn status_value(effect: EffectCategory) -> f64 {
    match effect {
        EffectCategory::StatBoost => 80.0,
        EffectCategory::Sleep => 70.0,
        EffectCategory::Screen => 60.0,
        EffectCategory::NoOp => 5.0,
        EffectCategory::Other => 30.0,
    }
}
