//! Wall-clock bounded execution of a decision

use std::time::{Duration, Instant};

use foresight_battle::ActionOption;
use tokio::task;
use tracing::{error, info, warn};

use crate::cancel::CancelToken;
use crate::error::{AgentError, AgentResult};
use crate::search::Decision;

/// How a bounded decision ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The search finished in time
    Completed(Decision),
    /// The search timed out or failed; the fallback was used instead
    Fallback {
        action: Option<ActionOption>,
        reason: AgentError,
    },
}

impl Outcome {
    /// The action to hand back to the host
    pub fn into_action(self) -> Option<ActionOption> {
        match self {
            Outcome::Completed(decision) => decision.action,
            Outcome::Fallback { action, .. } => action,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

/// Runs one decision on a blocking worker under a deadline
#[derive(Debug, Clone, Copy)]
pub struct DeadlineExecutor {
    budget: Duration,
}

impl DeadlineExecutor {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Run `job` on a worker thread and wait at most the budget for it
    ///
    /// On timeout the worker's cancel token is tripped and the caller
    /// returns immediately with `fallback`; the worker stops at its next
    /// node. Errors and panics inside `job` also yield `fallback`. This
    /// never fails.
    pub async fn run<F>(&self, job: F, fallback: Option<ActionOption>) -> Outcome
    where
        F: FnOnce(CancelToken) -> AgentResult<Decision> + Send + 'static,
    {
        let started = Instant::now();
        let cancel = CancelToken::new();
        let worker = task::spawn_blocking({
            let cancel = cancel.clone();
            move || job(cancel)
        });

        let reason = match tokio::time::timeout(self.budget, worker).await {
            Ok(Ok(Ok(decision))) => {
                info!(
                    action = ?decision.action.as_ref().map(ToString::to_string),
                    value = decision.value,
                    nodes = decision.stats.nodes,
                    deepest_ply = decision.stats.deepest_ply,
                    elapsed_ms = decision.elapsed.as_millis() as u64,
                    "Decision complete"
                );
                return Outcome::Completed(decision);
            }
            Ok(Ok(Err(err))) => err,
            Ok(Err(join_err)) => AgentError::SearchFault(join_err.to_string()),
            Err(_) => {
                cancel.cancel();
                AgentError::SearchTimeout(self.budget)
            }
        };

        match &reason {
            AgentError::SearchTimeout(budget) => warn!(
                budget_ms = budget.as_millis() as u64,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Timeout, using fallback action"
            ),
            err => error!(error = %err, "Search failed, using fallback action"),
        }

        Outcome::Fallback {
            action: fallback,
            reason,
        }
    }
}
