//! Heuristic battle evaluation from one side's perspective

use foresight_battle::query::is_super_effective;
use foresight_battle::{BattleSnapshot, CreatureSnapshot, SideIndex, Stat};

const HP_WEIGHT: f64 = 300.0;
const TYPE_ADVANTAGE_BONUS: f64 = 100.0;
const STATUS_WEIGHT: f64 = 50.0;
const ALIVE_WEIGHT: f64 = 200.0;

/// Score a snapshot for `perspective`; higher is better for that side
///
/// Sums four signals: the HP-ratio difference of the active creatures, a
/// bonus when our primary type is super effective against theirs, status
/// afflictions on either active creature, and the difference in living
/// creatures across both parties. Returns 0 when either side has no active
/// creature.
pub fn evaluate(snapshot: &BattleSnapshot, perspective: SideIndex) -> f64 {
    let opponent = perspective.opponent();
    let (Some(mine), Some(theirs)) = (
        snapshot.active_creature(perspective),
        snapshot.active_creature(opponent),
    ) else {
        return 0.0;
    };

    let mut utility = (hp_ratio(mine) - hp_ratio(theirs)) * HP_WEIGHT;

    if is_super_effective(mine, theirs) {
        utility += TYPE_ADVANTAGE_BONUS;
    }

    if theirs.has_status() {
        utility += STATUS_WEIGHT;
    }
    if mine.has_status() {
        utility -= STATUS_WEIGHT;
    }

    let alive_diff = snapshot.side(perspective).alive_count() as f64
        - snapshot.side(opponent).alive_count() as f64;
    utility += alive_diff * ALIVE_WEIGHT;

    utility
}

// A creature whose initial HP is unknown (zero) counts as empty.
fn hp_ratio(creature: &CreatureSnapshot) -> f64 {
    creature.stats.ratio(Stat::Hp).unwrap_or(0.0)
}
