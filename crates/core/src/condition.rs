// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Joint waits over several event counters
//!
//! A [`ConditionSet`] collects `(event, count)` pairs from a listener and
//! resolves once every one of them is reached, sharing a single timeout.

use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::listener::Tracked;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// One `(event, count)` requirement within a condition set
#[derive(Debug, Clone)]
pub struct Condition {
    counter: Arc<Counter>,
    count: u64,
}

impl Condition {
    pub fn event(&self) -> &str {
        self.counter.name()
    }

    /// Total firings required
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_satisfied(&self) -> bool {
        self.counter.count() >= self.count
    }
}

/// Conjunction of event thresholds with a shared timeout.
///
/// Build one with [`Listener::when`](crate::Listener::when), chain more
/// conditions with [`ConditionSet::and`], then call
/// [`ConditionSet::resolve`] or `.await` the set directly.
#[derive(Debug, Clone)]
pub struct ConditionSet {
    tracked: Tracked,
    conditions: Vec<Condition>,
    timeout: Duration,
}

impl ConditionSet {
    pub(crate) fn new(tracked: Tracked, timeout: Duration) -> Self {
        Self {
            tracked,
            conditions: Vec::new(),
            timeout,
        }
    }

    /// Require `name` to have fired `count` times in total.
    ///
    /// Leaves the set unchanged on error.
    pub fn add_condition(&mut self, name: &str, count: u64) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyEventName);
        }
        let counter = self
            .tracked
            .get(name)
            .ok_or_else(|| Error::NotListening(name.to_string()))?;

        self.conditions.push(Condition {
            counter: Arc::clone(counter),
            count,
        });
        Ok(())
    }

    pub fn and(mut self, name: &str, count: u64) -> Result<Self> {
        self.add_condition(name, count)?;
        Ok(self)
    }

    pub fn and_once(self, name: &str) -> Result<Self> {
        self.and(name, 1)
    }

    /// Override the timeout for this set; zero waits without bound
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// True if every condition is already met
    pub fn is_satisfied(&self) -> bool {
        self.conditions.iter().all(Condition::is_satisfied)
    }

    /// Wait until every condition is met or the timeout elapses.
    ///
    /// All waits run concurrently with the same timeout. The first failure
    /// cancels the remaining waits and is returned. Resolving again checks
    /// the current counts afresh.
    pub async fn resolve(&self) -> Result<()> {
        tracing::debug!(
            conditions = self.conditions.len(),
            timeout = ?self.timeout,
            "resolving"
        );

        let mut waits = JoinSet::new();
        for condition in &self.conditions {
            let counter = Arc::clone(&condition.counter);
            let threshold = condition.count;
            let timeout = self.timeout;
            waits.spawn(async move { counter.wait_until(threshold, timeout).await });
        }

        while let Some(joined) = waits.join_next().await {
            let outcome = joined
                .map_err(|e| Error::Aborted(e.to_string()))
                .and_then(|result| result);
            if let Err(e) = outcome {
                waits.abort_all();
                tracing::debug!(error = %e, "condition set failed");
                return Err(e);
            }
        }

        tracing::debug!("condition set satisfied");
        Ok(())
    }
}

impl IntoFuture for ConditionSet {
    type Output = Result<()>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<()>> + Send + 'static>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.resolve().await })
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
