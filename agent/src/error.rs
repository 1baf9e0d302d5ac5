use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while choosing an action
///
/// None of these reach the host: the controller absorbs them and answers
/// with the fallback action instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("Missing view: {0}")]
    MissingView(&'static str),

    #[error("Failed to evaluate candidate {action}: {reason}")]
    CandidateEvaluation { action: String, reason: String },

    #[error("Search exceeded its budget of {0:?}")]
    SearchTimeout(Duration),

    #[error("Search failed: {0}")]
    SearchFault(String),

    #[error("Search cancelled")]
    Cancelled,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroDepth,

    #[error("max_thinking_time must be greater than zero")]
    ZeroThinkingTime,
}

pub type AgentResult<T> = Result<T, AgentError>;
