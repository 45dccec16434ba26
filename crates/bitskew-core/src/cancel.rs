//! Cooperative interruption for long-running searches.

use std::sync::atomic::{AtomicBool, Ordering};

/// A shared stop flag checked by the search engine between offset rows.
///
/// Every persisted improvement is durable on its own, so stopping mid-run
/// loses nothing but unexplored search space.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    /// Create a new signal in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the search to stop at its next check point.
    pub fn trigger(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Check if a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
