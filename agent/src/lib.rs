//! Time-bounded decision agent for two-party turn-based battles.
//!
//! The agent controls one side. Asked for an action, it captures the
//! engine's state through the [`foresight_battle`] view traits, runs a
//! bounded-depth expectimax search on a worker thread, and answers with the
//! best action found. If the search overruns its thinking budget or fails,
//! the first legal action is returned instead; the host is never left
//! without an answer.
//!
//! # Overview
//!
//! ```text
//! host / simulation engine
//!        │  BattleView
//!        ▼
//! Agent::next_action ─> DeadlineExecutor (budget, cancel token)
//!        │
//!        └─> SearchEngine::decide
//!               ├─> scorer::score       (immediate value of a candidate)
//!               ├─> SearchEngine::search (lookahead over Transition)
//!               └─> evaluator::evaluate  (leaf value)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use foresight_agent::{Agent, AgentConfig};
//! use foresight_battle::{
//!     BattleSnapshot, CreatureSnapshot, MoveSnapshot, SideIndex, SideSnapshot, Type,
//! };
//!
//! let battle = BattleSnapshot::new(
//!     SideSnapshot::new().with_creature(
//!         CreatureSnapshot::new("Charmander", Type::Fire, 100)
//!             .with_move(MoveSnapshot::damaging("Ember", Type::Fire, 40)),
//!     ),
//!     SideSnapshot::new().with_creature(CreatureSnapshot::new("Bulbasaur", Type::Grass, 100)),
//! );
//!
//! let agent = Agent::new(SideIndex::P1, AgentConfig::default()).unwrap();
//! let action = agent.next_action_blocking(&battle);
//! assert_eq!(action.unwrap().to_string(), "Ember");
//! ```

mod agent;
mod cancel;
pub mod config;
pub mod error;
pub mod evaluator;
mod executor;
pub mod scorer;
pub mod search;
pub mod transition;

pub use agent::Agent;
pub use cancel::CancelToken;
pub use config::{AgentConfig, OpponentModel, SwitchCandidates};
pub use error::{AgentError, AgentResult, ConfigError};
pub use executor::{DeadlineExecutor, Outcome};
pub use search::{Decision, SearchEngine, SearchNode, SearchStats, candidate_actions};
pub use transition::{Transition, Unchanged};

pub use foresight_battle;
