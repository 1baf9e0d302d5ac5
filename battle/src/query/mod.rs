//! Query helpers for battle decision making
//!
//! This module provides legal action enumeration and type matchup
//! utilities shared by every decision policy.

mod actions;
mod matchup;

pub use actions::{first_switch_target, legal_actions};
pub use matchup::{is_super_effective, matchup_multiplier};
