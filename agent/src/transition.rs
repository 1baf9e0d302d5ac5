//! Successor-state derivation for lookahead

use foresight_battle::{ActionOption, BattleSnapshot, SideIndex};

/// Produces the battle that follows one side taking an action
///
/// Implemented by the host's simulation engine. Returning `None` means no
/// successor is modelled and the search keeps scoring the current snapshot
/// at the next ply.
pub trait Transition: Send + Sync {
    fn successor(
        &self,
        snapshot: &BattleSnapshot,
        side: SideIndex,
        action: &ActionOption,
    ) -> Option<BattleSnapshot>;
}

/// Never derives a successor; every ply re-evaluates the decision snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchanged;

impl Transition for Unchanged {
    fn successor(
        &self,
        _: &BattleSnapshot,
        _: SideIndex,
        _: &ActionOption,
    ) -> Option<BattleSnapshot> {
        None
    }
}
