//! Domain types for battle snapshots

mod battle;
mod creature;
mod moves;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use battle::{BattleSnapshot, SideIndex};
pub use creature::CreatureSnapshot;
pub use moves::{ActionOption, EffectCategory, MoveSnapshot};
pub use pokemon_type::{TYPE_CHART, Type};
pub use side::SideSnapshot;
pub use stats::{Stat, StatBlock};
pub use status::Status;
