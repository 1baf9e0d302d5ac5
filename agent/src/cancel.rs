//! Cooperative cancellation shared between the caller and the search worker

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AgentError, AgentResult};

/// Cooperative stop signal shared between a caller and a search worker
///
/// The search checks it on every node, so tripping it makes an abandoned
/// worker unwind within one node expansion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this token to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// `Err(Cancelled)` once the token has been tripped
    pub fn check(&self) -> AgentResult<()> {
        if self.is_cancelled() {
            return Err(AgentError::Cancelled);
        }
        Ok(())
    }
}
