//! BattleSnapshot - the two-sided battle value the agent decides on

use super::creature::CreatureSnapshot;
use super::side::SideSnapshot;

/// Identifies one of the two parties in a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideIndex {
    P1,
    P2,
}

impl SideIndex {
    /// The other party
    pub fn opponent(self) -> Self {
        match self {
            SideIndex::P1 => SideIndex::P2,
            SideIndex::P2 => SideIndex::P1,
        }
    }

    /// Array index (0 or 1)
    pub fn index(self) -> usize {
        match self {
            SideIndex::P1 => 0,
            SideIndex::P2 => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideIndex::P1 => "p1",
            SideIndex::P2 => "p2",
        }
    }
}

impl std::fmt::Display for SideIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable view of both sides of a battle at one point in time
///
/// Nothing in the agent mutates a snapshot; successor states, when a
/// simulator provides them, are new values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    sides: [SideSnapshot; 2],
}

impl BattleSnapshot {
    /// Create a snapshot from both sides
    pub fn new(p1: SideSnapshot, p2: SideSnapshot) -> Self {
        Self { sides: [p1, p2] }
    }

    /// Get a side
    pub fn side(&self, side: SideIndex) -> &SideSnapshot {
        &self.sides[side.index()]
    }

    /// Get the active creature of a side
    pub fn active_creature(&self, side: SideIndex) -> Option<&CreatureSnapshot> {
        self.side(side).active_creature()
    }

    /// Iterate over both sides in order
    pub fn sides(&self) -> impl Iterator<Item = (SideIndex, &SideSnapshot)> {
        [SideIndex::P1, SideIndex::P2]
            .into_iter()
            .zip(self.sides.iter())
    }

    /// Replace one side, producing a new snapshot
    pub fn with_side(&self, side: SideIndex, replacement: SideSnapshot) -> Self {
        let mut next = self.clone();
        next.sides[side.index()] = replacement;
        next
    }
}
