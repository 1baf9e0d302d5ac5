//! Bounded-depth expectimax search and the top-level decision
//!
//! A decision scores every candidate action with the [`scorer`](crate::scorer),
//! expands the promising ones through a recursive search that alternates
//! between our ply (maximize) and the opponent's ply (minimize or average,
//! per [`OpponentModel`]), and blends the immediate score with the lookahead
//! value. Leaves are scored by the [`evaluator`](crate::evaluator).

use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use foresight_battle::{ActionOption, BattleSnapshot, CreatureSnapshot, SideIndex, legal_actions};
use tracing::{debug, trace, warn};

use crate::cancel::CancelToken;
use crate::config::{AgentConfig, OpponentModel, SwitchCandidates};
use crate::error::{AgentError, AgentResult};
use crate::evaluator::evaluate;
use crate::scorer::score;
use crate::transition::Transition;

/// A candidate is only expanded when its immediate score beats this share
/// of the best value found so far.
const PRUNE_RATIO: f64 = 0.8;
const IMMEDIATE_WEIGHT: f64 = 0.4;
const LOOKAHEAD_WEIGHT: f64 = 0.6;

/// One ply of the search tree, owned by the call that expands it
#[derive(Debug, Clone)]
pub struct SearchNode<'a> {
    /// Battle at this ply (borrowed from the parent when nothing changed)
    pub snapshot: Cow<'a, BattleSnapshot>,
    /// 1 for the first lookahead ply, +1 per level
    pub depth: usize,
    /// Whether this ply is ours
    pub maximizing: bool,
    /// Action that led here from the parent
    pub action: ActionOption,
    /// Likelihood of `action` among the parent's branches
    pub probability: f64,
}

impl<'a> SearchNode<'a> {
    /// Opponent ply following our candidate at the root
    pub fn first_ply(
        root: &'a BattleSnapshot,
        successor: Option<BattleSnapshot>,
        action: ActionOption,
    ) -> Self {
        Self {
            snapshot: successor.map_or(Cow::Borrowed(root), Cow::Owned),
            depth: 1,
            maximizing: false,
            action,
            probability: 1.0,
        }
    }

    fn child(
        &self,
        successor: Option<BattleSnapshot>,
        action: ActionOption,
        probability: f64,
    ) -> SearchNode<'_> {
        SearchNode {
            snapshot: successor.map_or(Cow::Borrowed(self.snapshot.as_ref()), Cow::Owned),
            depth: self.depth + 1,
            maximizing: !self.maximizing,
            action,
            probability,
        }
    }
}

/// Counters collected over one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of `search` invocations
    pub nodes: u64,
    /// Deepest depth any invocation reached
    pub deepest_ply: usize,
}

impl SearchStats {
    fn visit(&mut self, depth: usize) {
        self.nodes += 1;
        self.deepest_ply = self.deepest_ply.max(depth);
    }
}

/// Result of a completed decision
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Chosen action (`None` when no candidate exists)
    pub action: Option<ActionOption>,
    /// Final value of the chosen action
    pub value: f64,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Actions a decision considers for `side`, in enumeration order
pub fn candidate_actions(
    battle: &BattleSnapshot,
    side: SideIndex,
    switches: SwitchCandidates,
) -> Vec<ActionOption> {
    let mut actions = legal_actions(battle, side);
    if switches == SwitchCandidates::Exclude {
        actions.retain(|a| !a.is_switch());
    }
    actions
}

/// Search state for one decision
pub struct SearchEngine<'t> {
    side: SideIndex,
    max_depth: usize,
    opponent_model: OpponentModel,
    switch_candidates: SwitchCandidates,
    transition: &'t dyn Transition,
    cancel: CancelToken,
    stats: SearchStats,
}

impl<'t> SearchEngine<'t> {
    pub fn new(
        side: SideIndex,
        config: &AgentConfig,
        transition: &'t dyn Transition,
        cancel: CancelToken,
    ) -> Self {
        Self {
            side,
            max_depth: config.max_depth,
            opponent_model: config.opponent_model,
            switch_candidates: config.switch_candidates,
            transition,
            cancel,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best candidate action on `root`
    ///
    /// Ties keep the earliest candidate. A candidate that fails to evaluate
    /// is skipped; cancellation aborts the whole decision.
    pub fn decide(&mut self, root: &BattleSnapshot) -> AgentResult<Decision> {
        let started = Instant::now();
        let candidates = candidate_actions(root, self.side, self.switch_candidates);

        if let Some(active) = root.active_creature(self.side) {
            log_moves(active);
        }

        let target = root.active_creature(self.side.opponent());
        let mut best = candidates.first().cloned();
        let mut best_value = f64::NEG_INFINITY;

        for action in candidates {
            self.cancel.check()?;

            let Some(target) = target else {
                continue;
            };

            match self.value_candidate(root, &action, target, best_value) {
                Ok(value) => {
                    debug!(action = %action, value, "Evaluated candidate");
                    if value > best_value {
                        best_value = value;
                        best = Some(action);
                    }
                }
                Err(AgentError::Cancelled) => return Err(AgentError::Cancelled),
                Err(err) => warn!(error = %err, "Skipping candidate"),
            }
        }

        Ok(Decision {
            action: best,
            value: best_value,
            stats: self.stats,
            elapsed: started.elapsed(),
        })
    }

    /// Value of a tree node from our perspective
    pub fn search(&mut self, node: &SearchNode<'_>) -> AgentResult<f64> {
        self.cancel.check()?;
        self.stats.visit(node.depth);
        trace!(
            depth = node.depth,
            maximizing = node.maximizing,
            action = %node.action,
            "Visiting node"
        );

        if node.depth >= self.max_depth {
            return Ok(evaluate(&node.snapshot, self.side));
        }

        if node.maximizing {
            self.max_ply(node)
        } else {
            self.min_ply(node)
        }
    }

    // Panics raised by the transition are contained to the candidate.
    fn value_candidate(
        &mut self,
        root: &BattleSnapshot,
        action: &ActionOption,
        target: &CreatureSnapshot,
        best_value: f64,
    ) -> AgentResult<f64> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.expand_candidate(root, action, target, best_value)
        }))
        .unwrap_or_else(|payload| {
            Err(AgentError::CandidateEvaluation {
                action: action.to_string(),
                reason: panic_message(payload.as_ref()),
            })
        })
    }

    fn expand_candidate(
        &mut self,
        root: &BattleSnapshot,
        action: &ActionOption,
        target: &CreatureSnapshot,
        best_value: f64,
    ) -> AgentResult<f64> {
        let immediate = ensure_finite(score(action, Some(target)), action, "immediate score")?;
        if immediate <= PRUNE_RATIO * best_value {
            return Ok(immediate);
        }

        let successor = self.transition.successor(root, self.side, action);
        let node = SearchNode::first_ply(root, successor, action.clone());
        let lookahead = ensure_finite(self.search(&node)?, action, "lookahead value")?;

        Ok(IMMEDIATE_WEIGHT * immediate + LOOKAHEAD_WEIGHT * lookahead)
    }

    fn max_ply(&mut self, node: &SearchNode<'_>) -> AgentResult<f64> {
        let mut best: Option<f64> = None;

        for action in candidate_actions(&node.snapshot, self.side, self.switch_candidates) {
            let successor = self.transition.successor(&node.snapshot, self.side, &action);
            let child = node.child(successor, action, 1.0);
            let value = self.search(&child)?;
            best = Some(best.map_or(value, |b| b.max(value)));
        }

        Ok(best.unwrap_or_else(|| evaluate(&node.snapshot, self.side)))
    }

    fn min_ply(&mut self, node: &SearchNode<'_>) -> AgentResult<f64> {
        if self.opponent_model == OpponentModel::Collapsed {
            return Ok(evaluate(&node.snapshot, self.side));
        }

        let opponent = self.side.opponent();
        let replies = legal_actions(&node.snapshot, opponent);
        if replies.is_empty() {
            return Ok(evaluate(&node.snapshot, self.side));
        }

        let likelihood = 1.0 / replies.len() as f64;
        let mut worst = f64::INFINITY;
        let mut expected = 0.0;

        for reply in replies {
            let successor = self.transition.successor(&node.snapshot, opponent, &reply);
            let child = node.child(successor, reply, likelihood);
            let value = self.search(&child)?;
            worst = worst.min(value);
            expected += child.probability * value;
        }

        Ok(match self.opponent_model {
            OpponentModel::WorstCase => worst,
            _ => expected,
        })
    }
}

fn ensure_finite(value: f64, action: &ActionOption, what: &str) -> AgentResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AgentError::CandidateEvaluation {
            action: action.to_string(),
            reason: format!("{what} is {value}"),
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn log_moves(active: &CreatureSnapshot) {
    debug!(creature = %active.name, moves = active.moves.len(), "Choosing action");
    for m in &active.moves {
        debug!(
            name = %m.name,
            move_type = %m.move_type,
            power = ?m.power,
            accuracy = m.accuracy,
            "Usable move"
        );
    }
}
