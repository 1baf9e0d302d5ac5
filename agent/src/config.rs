//! Construction-time agent configuration

use std::time::Duration;

use crate::error::ConfigError;

/// How the search treats the opponent's ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpponentModel {
    /// Score the opponent's ply by evaluating the snapshot directly,
    /// without enumerating replies
    Collapsed,
    /// Assume the opponent picks the reply worst for us (minimax)
    WorstCase,
    /// Average over the opponent's replies, each equally likely
    #[default]
    Expectation,
}

/// Whether switching competes with attacks during a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchCandidates {
    /// Only attacks are considered
    #[default]
    Exclude,
    /// Switches are candidates too; the action scorer values them at 0
    Include,
}

/// Agent settings, fixed for the lifetime of an agent
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Depth at which the search stops and evaluates (at least 1)
    pub max_depth: usize,
    /// Wall-clock budget for a single decision
    pub max_thinking_time: Duration,
    pub opponent_model: OpponentModel,
    pub switch_candidates: SwitchCandidates,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_thinking_time: Duration::from_secs(6 * 60),
            opponent_model: OpponentModel::default(),
            switch_candidates: SwitchCandidates::default(),
        }
    }
}

impl AgentConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_thinking_time(mut self, budget: Duration) -> Self {
        self.max_thinking_time = budget;
        self
    }

    pub fn with_opponent_model(mut self, model: OpponentModel) -> Self {
        self.opponent_model = model;
        self
    }

    pub fn with_switch_candidates(mut self, switches: SwitchCandidates) -> Self {
        self.switch_candidates = switches;
        self
    }

    /// Reject settings the search cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.max_thinking_time.is_zero() {
            return Err(ConfigError::ZeroThinkingTime);
        }
        Ok(())
    }
}
