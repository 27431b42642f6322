//! Commit scheduling
//!
//! Turns the keystroke stream into commit requests according to the
//! controller's `CommitPolicy`. Deadlines use tokio's clock so paused-time
//! tests can step through the quiescence window.

use roster_core::CommitPolicy;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    query: String,
    deadline: Instant,
}

/// Holds at most one not-yet-committed query
#[derive(Debug)]
pub(crate) struct Debouncer {
    window: Option<Duration>,
    pending: Option<PendingCommit>,
}

impl Debouncer {
    pub(crate) fn new(policy: CommitPolicy) -> Self {
        Self {
            window: policy.window(),
            pending: None,
        }
    }

    /// Record an input at `now`
    ///
    /// Returns the query to commit right away under the immediate policy.
    /// Under the debounced policy the input replaces any pending one and
    /// restarts the window.
    pub(crate) fn schedule(&mut self, query: String, now: Instant) -> Option<String> {
        match self.window {
            None => Some(query),
            Some(window) => {
                self.pending = Some(PendingCommit {
                    query,
                    deadline: now + window,
                });
                None
            }
        }
    }

    /// Take the pending query if its window has elapsed
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }
}
