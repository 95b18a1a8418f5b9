//! Last-write-wins debouncing
//!
//! Delays an action until input has been quiet for a fixed interval.
//! Scheduling again, or cancelling, supersedes whatever was pending.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Debounce scheduler with at most one pending action
///
/// Each `schedule` call arms a timer task on the current Tokio runtime.
/// The generation gate is held while an action runs, so once `schedule` or
/// `cancel` returns, no superseded action can start.
pub struct DebounceScheduler {
    /// Quiet period before the action runs
    delay: Duration,

    /// Generation of the most recently armed timer
    gate: Arc<Mutex<u64>>,

    /// Timer task for the pending action
    pending: Option<JoinHandle<()>>,
}

impl DebounceScheduler {
    /// Create a scheduler with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            gate: Arc::new(Mutex::new(0)),
            pending: None,
        }
    }

    /// Quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` once `delay` elapses without another `schedule` call
    ///
    /// Cancels any previously scheduled action first.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let generation = self.supersede();

        let gate = Arc::clone(&self.gate);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let current = gate.lock();
            if *current != generation {
                trace!("Debounced action {} superseded", generation);
                return;
            }
            action();
        }));
    }

    /// Drop the pending action, if any
    ///
    /// No-op when nothing is pending.
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            self.supersede();
        }
    }

    /// Wait until the pending action, if any, has run
    ///
    /// Cancel-safe: dropping the returned future leaves the action pending.
    pub async fn wait(&mut self) {
        let Some(handle) = self.pending.as_mut() else {
            return;
        };

        let result = handle.await;
        self.pending = None;
        if let Err(err) = result {
            if !err.is_cancelled() {
                warn!("Debounced action failed: {}", err);
            }
        }
    }

    /// Is an action waiting for its timer?
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Invalidate the pending action and return the next generation
    fn supersede(&mut self) -> u64 {
        // Bumping under the gate waits out an action that is already running.
        let generation = {
            let mut current = self.gate.lock();
            *current += 1;
            *current
        };

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        generation
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
