//! Battle snapshots and read-only engine views.
//!
//! This crate provides the value types the decision agent works on, and the
//! traits an external simulation engine implements to expose its live state.
//!
//! # Overview
//!
//! ```text
//! simulation engine (owns the live battle)
//!        │  implements BattleView / SideView / CreatureView / MoveView
//!        ▼
//! foresight-battle (snapshots + queries) ← THIS CRATE
//!        │
//!        └─> foresight-agent (evaluation and search)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with effectiveness chart
//! - [`Status`] - Non-volatile status conditions (Burn, Sleep, etc.)
//! - [`StatBlock`] - Current and initial value of every stat
//! - [`MoveSnapshot`] and [`EffectCategory`] - Usable moves
//! - [`ActionOption`] - An attack or a switch
//! - [`CreatureSnapshot`], [`SideSnapshot`], [`BattleSnapshot`] - Battle state
//!
//! ## Views
//! - [`BattleView`] and friends - Implemented by the engine, captured with
//!   [`BattleSnapshot::capture`]
//!
//! # Example Usage
//!
//! ```
//! use foresight_battle::{
//!     legal_actions, BattleSnapshot, CreatureSnapshot, MoveSnapshot, SideIndex, SideSnapshot,
//!     Type,
//! };
//!
//! let charmander = CreatureSnapshot::new("Charmander", Type::Fire, 100)
//!     .with_move(MoveSnapshot::damaging("Ember", Type::Fire, 40));
//! let bulbasaur = CreatureSnapshot::new("Bulbasaur", Type::Grass, 100);
//!
//! let battle = BattleSnapshot::new(
//!     SideSnapshot::new().with_creature(charmander),
//!     SideSnapshot::new().with_creature(bulbasaur),
//! );
//!
//! let actions = legal_actions(&battle, SideIndex::P1);
//! assert_eq!(actions.len(), 1);
//! ```

pub mod query;
pub mod types;
pub mod view;

// Re-export main types at crate root for convenience
pub use query::{first_switch_target, legal_actions};
pub use types::{
    ActionOption, BattleSnapshot, CreatureSnapshot, EffectCategory, MoveSnapshot, SideIndex,
    SideSnapshot, Stat, StatBlock, Status, TYPE_CHART, Type,
};
pub use view::{BattleView, CreatureView, MoveView, SideView};
