use std::sync::Arc;

use foresight_battle::{
    ActionOption, BattleSnapshot, BattleView, SideIndex, SideSnapshot, SideView,
    first_switch_target, legal_actions,
};
use tokio::runtime;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::config::AgentConfig;
use crate::error::{AgentError, AgentResult};
use crate::executor::DeadlineExecutor;
use crate::search::SearchEngine;
use crate::transition::{Transition, Unchanged};

/// Decision agent controlling one side of a battle
///
/// Every call captures the engine's state first, so the engine is never
/// touched by the search. Calls on the same agent are served one at a time.
pub struct Agent<T: Transition = Unchanged> {
    side: SideIndex,
    config: AgentConfig,
    transition: Arc<T>,
    decision_lock: Mutex<()>,
}

impl Agent<Unchanged> {
    /// Create an agent that models no successor states
    pub fn new(side: SideIndex, config: AgentConfig) -> AgentResult<Self> {
        Self::with_transition(side, config, Unchanged)
    }
}

impl<T: Transition + 'static> Agent<T> {
    /// Create an agent whose lookahead derives successors through `transition`
    pub fn with_transition(
        side: SideIndex,
        config: AgentConfig,
        transition: T,
    ) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self {
            side,
            config,
            transition: Arc::new(transition),
            decision_lock: Mutex::new(()),
        })
    }

    pub fn side(&self) -> SideIndex {
        self.side
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Choose an action for the agent's side, within the thinking budget
    ///
    /// Returns `None` when the agent has no active creature or it has no
    /// legal action. On timeout or search failure, or when the search has no
    /// candidate to offer, the first legal action is returned.
    pub async fn next_action<B: BattleView + ?Sized>(&self, view: &B) -> Option<ActionOption> {
        let snapshot = self.capture(view).ok()?;
        let _guard = self.decision_lock.lock().await;
        self.decide(snapshot).await
    }

    /// Blocking form of [`next_action`](Self::next_action) for synchronous hosts
    ///
    /// Drives the decision on a private runtime. Must not be called from
    /// inside an async context.
    pub fn next_action_blocking<B: BattleView + ?Sized>(&self, view: &B) -> Option<ActionOption> {
        let snapshot = self.capture(view).ok()?;
        let _guard = self.decision_lock.blocking_lock();

        let rt = match runtime::Builder::new_current_thread().enable_time().build() {
            Ok(rt) => rt,
            Err(e) => {
                error!(error = %e, "Failed to start decision runtime, using fallback action");
                return self.fallback(&snapshot);
            }
        };

        let action = rt.block_on(self.decide(snapshot));
        // A timed-out worker may still be inside the transition; detach it
        rt.shutdown_background();
        action
    }

    /// Index of the creature to send in after a faint
    ///
    /// This is the first living creature on the side, which may be the
    /// current active one.
    pub fn choose_switch_target<S: SideView + ?Sized>(&self, side: &S) -> Option<usize> {
        first_switch_target(&SideSnapshot::capture(side))
    }

    fn capture<B: BattleView + ?Sized>(&self, view: &B) -> AgentResult<BattleSnapshot> {
        let snapshot = BattleSnapshot::capture(view);
        if snapshot.active_creature(self.side).is_none() {
            let err = AgentError::MissingView("active creature");
            debug!(side = %self.side, error = %err, "No action available");
            return Err(err);
        }
        Ok(snapshot)
    }

    fn fallback(&self, snapshot: &BattleSnapshot) -> Option<ActionOption> {
        legal_actions(snapshot, self.side).into_iter().next()
    }

    async fn decide(&self, snapshot: BattleSnapshot) -> Option<ActionOption> {
        let Some(fallback) = self.fallback(&snapshot) else {
            debug!(side = %self.side, "No legal actions");
            return None;
        };

        let side = self.side;
        let config = self.config.clone();
        let transition = Arc::clone(&self.transition);
        let executor = DeadlineExecutor::new(self.config.max_thinking_time);

        executor
            .run(
                move |cancel| {
                    let mut engine = SearchEngine::new(side, &config, transition.as_ref(), cancel);
                    engine.decide(&snapshot)
                },
                Some(fallback.clone()),
            )
            .await
            .into_action()
            .or(Some(fallback))
    }
}
