//! Read-only views onto an external battle engine
//!
//! The simulation engine owns the live battle. It exposes it through these
//! traits, and the agent captures an owned [`BattleSnapshot`] from them once
//! per decision so the search can run on a worker without borrowing engine
//! state.
//!
//! The snapshot types implement the traits themselves, so a host that
//! already builds snapshots can pass them anywhere a view is expected.

use crate::types::{
    BattleSnapshot, CreatureSnapshot, EffectCategory, MoveSnapshot, SideIndex, SideSnapshot, Stat,
    StatBlock, Status, Type,
};

/// A usable move
pub trait MoveView {
    fn name(&self) -> &str;

    fn move_type(&self) -> Type;

    /// Base power (`None` for status moves)
    fn power(&self) -> Option<u32>;

    /// Accuracy percentage
    fn accuracy(&self) -> u32;

    fn critical_hit_ratio(&self) -> f64;

    /// Effect category of a status move
    ///
    /// Engines that tag their moves should override this. The default
    /// falls back to [`EffectCategory::from_move_name`].
    fn effect_category(&self) -> EffectCategory {
        EffectCategory::from_move_name(self.name())
    }
}

/// A creature on one side
pub trait CreatureView {
    type Move: MoveView;

    fn name(&self) -> &str;

    fn current_stat(&self, stat: Stat) -> u32;

    fn initial_stat(&self, stat: Stat) -> u32;

    fn primary_type(&self) -> Type;

    fn secondary_type(&self) -> Option<Type>;

    /// Non-volatile status, if any
    fn status(&self) -> Option<Status>;

    fn has_fainted(&self) -> bool;

    /// Moves usable this turn, in listed order
    fn available_moves(&self) -> Vec<&Self::Move>;
}

/// One party
pub trait SideView {
    type Creature: CreatureView;

    /// Creatures in bench order
    fn creatures(&self) -> Vec<&Self::Creature>;

    /// Index of the active creature
    fn active_index(&self) -> Option<usize>;
}

/// The whole battle
pub trait BattleView {
    type Side: SideView;

    /// A side's view, if the engine exposes it
    fn side(&self, side: SideIndex) -> Option<&Self::Side>;
}

impl MoveSnapshot {
    /// Capture a move view
    pub fn capture<M: MoveView + ?Sized>(view: &M) -> Self {
        Self {
            name: view.name().to_string(),
            move_type: view.move_type(),
            power: view.power(),
            accuracy: view.accuracy(),
            critical_hit_ratio: view.critical_hit_ratio(),
            effect: view.effect_category(),
        }
    }
}

impl CreatureSnapshot {
    /// Capture a creature view
    pub fn capture<C: CreatureView + ?Sized>(view: &C) -> Self {
        let mut stats = StatBlock::new();
        for stat in Stat::ALL {
            stats.set(stat, view.current_stat(stat), view.initial_stat(stat));
        }

        Self {
            name: view.name().to_string(),
            stats,
            primary_type: view.primary_type(),
            secondary_type: view.secondary_type(),
            status: view.status(),
            fainted: view.has_fainted(),
            moves: view
                .available_moves()
                .into_iter()
                .map(MoveSnapshot::capture)
                .collect(),
        }
    }
}

impl SideSnapshot {
    /// Capture a side view
    pub fn capture<S: SideView + ?Sized>(view: &S) -> Self {
        Self {
            creatures: view
                .creatures()
                .into_iter()
                .map(CreatureSnapshot::capture)
                .collect(),
            active_index: view.active_index(),
        }
    }
}

impl BattleSnapshot {
    /// Capture a battle view
    ///
    /// A side the engine does not expose is captured as an empty side with
    /// no active creature.
    pub fn capture<B: BattleView + ?Sized>(view: &B) -> Self {
        let side = |idx: SideIndex| view.side(idx).map(SideSnapshot::capture).unwrap_or_default();
        Self::new(side(SideIndex::P1), side(SideIndex::P2))
    }
}

// === Snapshots are views of themselves ===

impl MoveView for MoveSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_type(&self) -> Type {
        self.move_type
    }

    fn power(&self) -> Option<u32> {
        self.power
    }

    fn accuracy(&self) -> u32 {
        self.accuracy
    }

    fn critical_hit_ratio(&self) -> f64 {
        self.critical_hit_ratio
    }

    fn effect_category(&self) -> EffectCategory {
        self.effect
    }
}

impl CreatureView for CreatureSnapshot {
    type Move = MoveSnapshot;

    fn name(&self) -> &str {
        &self.name
    }

    fn current_stat(&self, stat: Stat) -> u32 {
        self.stats.current(stat)
    }

    fn initial_stat(&self, stat: Stat) -> u32 {
        self.stats.initial(stat)
    }

    fn primary_type(&self) -> Type {
        self.primary_type
    }

    fn secondary_type(&self) -> Option<Type> {
        self.secondary_type
    }

    fn status(&self) -> Option<Status> {
        self.status
    }

    fn has_fainted(&self) -> bool {
        self.fainted
    }

    fn available_moves(&self) -> Vec<&MoveSnapshot> {
        self.moves.iter().collect()
    }
}

impl SideView for SideSnapshot {
    type Creature = CreatureSnapshot;

    fn creatures(&self) -> Vec<&CreatureSnapshot> {
        self.creatures.iter().collect()
    }

    fn active_index(&self) -> Option<usize> {
        self.active_index
    }
}

impl BattleView for BattleSnapshot {
    type Side = SideSnapshot;

    fn side(&self, side: SideIndex) -> Option<&SideSnapshot> {
        Some(BattleSnapshot::side(self, side))
    }
}
