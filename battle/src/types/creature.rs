//! Creature state as captured at decision time

use super::moves::MoveSnapshot;
use super::pokemon_type::Type;
use super::stats::{Stat, StatBlock};
use super::status::Status;

/// A creature on one side of the battle (immutable once captured)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSnapshot {
    /// Display name
    pub name: String,

    /// Current and initial stat values (HP at minimum)
    pub stats: StatBlock,

    /// Primary type
    pub primary_type: Type,

    /// Secondary type, for dual-typed creatures
    pub secondary_type: Option<Type>,

    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Whether this creature has fainted
    pub fainted: bool,

    /// Moves usable this turn, in listed order
    pub moves: Vec<MoveSnapshot>,
}

impl CreatureSnapshot {
    /// Create a healthy single-typed creature with the given max HP
    pub fn new(name: impl Into<String>, primary_type: Type, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            stats: StatBlock::with_hp(max_hp, max_hp),
            primary_type,
            secondary_type: None,
            status: None,
            fainted: false,
            moves: Vec::new(),
        }
    }

    /// Set the secondary type
    pub fn with_secondary_type(mut self, t: Type) -> Self {
        self.secondary_type = Some(t);
        self
    }

    /// Set current HP (initial HP is unchanged)
    pub fn with_hp(mut self, current: u32) -> Self {
        self.stats.set_current(Stat::Hp, current);
        self
    }

    /// Set the non-volatile status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a usable move
    pub fn with_move(mut self, m: MoveSnapshot) -> Self {
        self.moves.push(m);
        self
    }

    /// Mark as fainted (HP drops to zero)
    pub fn fainted(mut self) -> Self {
        self.fainted = true;
        self.stats.set_current(Stat::Hp, 0);
        self
    }

    /// Current HP
    pub fn hp(&self) -> u32 {
        self.stats.current(Stat::Hp)
    }

    /// HP at the start of the battle
    pub fn max_hp(&self) -> u32 {
        self.stats.initial(Stat::Hp)
    }

    /// Check if the creature is alive (not fainted)
    pub fn is_alive(&self) -> bool {
        !self.fainted
    }

    /// Whether a non-volatile status afflicts this creature
    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }
}
