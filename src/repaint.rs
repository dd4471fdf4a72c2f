//! Coalesced deferred updates.
//!
//! Multiple synchronous mutations within one event-loop turn collapse into a
//! single deferred update: the first `notify` arms the scheduler, reentrant
//! notifies while one is pending are no-ops, and the host runs the pending
//! update at the end of the turn. The callback re-reads current state at
//! execution time, so stale scheduled work is naturally superseded.

use tracing::error;

use crate::error::VerandaResult;

#[derive(Debug, Default)]
pub struct UpdateScheduler {
    pending: bool,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Request a deferred update. Returns whether a new update was actually
    /// scheduled (false while one is already pending).
    pub fn notify(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Run the pending update, if any. The pending flag is cleared before
    /// the closure runs, so the closure may re-arm the scheduler. Closure
    /// failures are logged and swallowed at this boundary; a failed update
    /// must not corrupt the caller's event dispatch.
    pub fn run_pending<F>(&mut self, update: F) -> bool
    where
        F: FnOnce() -> VerandaResult<()>,
    {
        if !self.pending {
            return false;
        }
        self.pending = false;
        if let Err(err) = update() {
            error!("Deferred update failed: {err}");
        }
        true
    }
}
