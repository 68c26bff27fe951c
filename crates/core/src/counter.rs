// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold counter for a single named event
//!
//! A [`Counter`] records how many times its event fired and releases waiters
//! once the total reaches the threshold they asked for. Waiters on the same
//! threshold share one signal.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;

/// Counts firings of one event and releases threshold waiters
#[derive(Debug)]
pub struct Counter {
    name: String,
    state: Mutex<CounterState>,
}

#[derive(Debug, Default)]
struct CounterState {
    count: u64,
    /// One signal per threshold, flipped to `true` when the count reaches it
    pending: HashMap<u64, watch::Sender<bool>>,
}

impl Counter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(CounterState::default()),
        }
    }

    /// Name of the event being counted
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current number of increments
    pub fn count(&self) -> u64 {
        self.lock().count
    }

    /// Thresholds that still have a pending signal, ascending
    pub fn pending_thresholds(&self) -> Vec<u64> {
        let mut thresholds: Vec<u64> = self.lock().pending.keys().copied().collect();
        thresholds.sort_unstable();
        thresholds
    }

    /// Record one firing and release everyone waiting on the new count.
    ///
    /// Returns the count after the increment.
    pub fn increment(&self) -> u64 {
        let mut state = self.lock();
        state.count += 1;
        let count = state.count;

        if let Some(signal) = state.pending.remove(&count) {
            signal.send_replace(true);
            tracing::debug!(event = %self.name, count, "threshold reached");
        } else {
            tracing::trace!(event = %self.name, count, "incremented");
        }

        count
    }

    /// Wait until the count reaches `threshold`.
    ///
    /// Returns immediately if the count is already there. A zero `timeout`
    /// waits without bound; otherwise [`Error::Timeout`] is returned once it
    /// elapses, carrying the count observed at that moment.
    pub async fn wait_until(&self, threshold: u64, timeout: Duration) -> Result<()> {
        // Check and register under the same lock `increment` takes, so an
        // increment cannot land between the two.
        let signal = {
            let mut state = self.lock();
            if state.count >= threshold {
                tracing::trace!(
                    event = %self.name,
                    threshold,
                    count = state.count,
                    "already reached"
                );
                return Ok(());
            }

            tracing::debug!(event = %self.name, threshold, count = state.count, "waiting");
            state
                .pending
                .entry(threshold)
                .or_insert_with(|| watch::channel(false).0)
                .subscribe()
        };

        let released = if timeout.is_zero() {
            reached(signal).await
        } else {
            match tokio::time::timeout(timeout, reached(signal)).await {
                Ok(released) => released,
                Err(_) => {
                    // The registration stays behind; a later increment
                    // resolves it with nobody listening.
                    let observed = self.count();
                    tracing::warn!(
                        event = %self.name,
                        threshold,
                        observed,
                        ?timeout,
                        "timed out"
                    );
                    return Err(Error::Timeout {
                        event: self.name.clone(),
                        threshold,
                        observed,
                    });
                }
            }
        };

        // The sender is only dropped once resolved, so a closed channel still
        // means the threshold was met; confirm against the count.
        if released || self.count() >= threshold {
            Ok(())
        } else {
            Err(Error::Aborted(format!(
                "signal for {} at {} dropped before it was reached",
                self.name, threshold
            )))
        }
    }

    fn lock(&self) -> MutexGuard<'_, CounterState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Resolves once the signal flips to `true`; false if it was dropped first
async fn reached(mut signal: watch::Receiver<bool>) -> bool {
    signal.wait_for(|reached| *reached).await.is_ok()
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
