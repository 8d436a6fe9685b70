//! Trailing-edge debounce
//!
//! Coalesces bursts of calls so only the last one fires, after `wait` of
//! inactivity. Used by the interactive mode to avoid re-running the search
//! on every keystroke-paced input line.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Debounces closures onto the tokio runtime. Each `call` cancels the
/// previously scheduled action.
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given settle time
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `action` to run after the settle time, cancelling any
    /// action scheduled by a previous call that has not fired yet.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            sleep(wait).await;
            action();
        }));
    }

    /// Cancel the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
