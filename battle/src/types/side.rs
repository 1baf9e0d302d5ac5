//! Side (party) state

use super::creature::CreatureSnapshot;

/// One party's side of the battle
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideSnapshot {
    /// Creatures on this side (bench order)
    pub creatures: Vec<CreatureSnapshot>,

    /// Index of the active creature, if any is on the field
    pub active_index: Option<usize>,
}

impl SideSnapshot {
    /// Create an empty side
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a creature; the first creature added becomes active
    pub fn with_creature(mut self, creature: CreatureSnapshot) -> Self {
        if self.active_index.is_none() && self.creatures.is_empty() {
            self.active_index = Some(0);
        }
        self.creatures.push(creature);
        self
    }

    /// Set which creature is active
    pub fn with_active(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    /// Get the active creature
    pub fn active_creature(&self) -> Option<&CreatureSnapshot> {
        self.active_index.and_then(|idx| self.creatures.get(idx))
    }

    /// Iterate over bench creatures (not active, not fainted) with their index
    pub fn get_bench(&self) -> impl Iterator<Item = (usize, &CreatureSnapshot)> {
        let active = self.active_index;
        self.creatures
            .iter()
            .enumerate()
            .filter(move |(idx, c)| Some(*idx) != active && c.is_alive())
    }

    /// Count non-fainted creatures, active and bench alike
    pub fn alive_count(&self) -> usize {
        self.creatures.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of creatures on the side
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}
