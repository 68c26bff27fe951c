// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener that counts named events from an [`EventSource`]
//!
//! The listener owns one [`Counter`] per event name and registers an
//! increment handler for each name when it is built. Conditions are started
//! with [`Listener::when`] and composed on the returned [`ConditionSet`].

use crate::condition::ConditionSet;
use crate::config::ListenerConfig;
use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::source::{handler, EventSource};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Counters keyed by event name, shared with every condition set
pub(crate) type Tracked = Arc<BTreeMap<String, Arc<Counter>>>;

/// Synchronizes test code that must wait for events from an [`EventSource`]
pub struct Listener {
    tracked: Tracked,
    default_timeout: Duration,
}

impl Listener {
    /// Start counting every event in `names`.
    ///
    /// All handlers are registered before this returns, so no firing that
    /// happens afterwards is missed. Names are checked before anything is
    /// registered, but registration is not rolled back: if the source
    /// rejects a name, handlers already registered for earlier names stay
    /// on the source.
    pub fn new<S, I, N>(source: &S, names: I) -> Result<Self>
    where
        S: EventSource + ?Sized,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::NoEventNames);
        }

        let mut tracked = BTreeMap::new();
        for name in names {
            if name.is_empty() {
                return Err(Error::EmptyEventName);
            }
            if tracked.contains_key(&name) {
                return Err(Error::DuplicateEventName(name));
            }
            let counter = Arc::new(Counter::new(name.clone()));
            tracked.insert(name, counter);
        }

        // Names are validated before anything is registered with the source
        for (name, counter) in &tracked {
            let target = Arc::clone(counter);
            source.on(
                name,
                handler(move || {
                    let counter = Arc::clone(&target);
                    async move {
                        counter.increment();
                    }
                }),
            )?;
        }

        tracing::debug!(events = ?tracked.keys().collect::<Vec<_>>(), "listening");

        Ok(Self {
            tracked: Arc::new(tracked),
            default_timeout: Duration::ZERO,
        })
    }

    /// Build a listener from configuration
    pub fn from_config<S>(source: &S, config: &ListenerConfig) -> Result<Self>
    where
        S: EventSource + ?Sized,
    {
        Ok(Self::new(source, config.events.iter().cloned())?
            .with_default_timeout(config.default_timeout))
    }

    /// Timeout given to condition sets created from now on
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn set_default_timeout(&mut self, timeout: Duration) {
        self.default_timeout = timeout;
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Tracked event names, sorted
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.tracked.keys().map(String::as_str)
    }

    /// Current count for a tracked event
    pub fn count(&self, name: &str) -> Option<u64> {
        self.tracked.get(name).map(|counter| counter.count())
    }

    /// Counter behind a tracked event
    pub fn counter(&self, name: &str) -> Option<&Arc<Counter>> {
        self.tracked.get(name)
    }

    /// Start a condition set waiting for `name` to fire `count` times in total
    pub fn begin_condition(&self, name: &str, count: u64) -> Result<ConditionSet> {
        let mut set = ConditionSet::new(Arc::clone(&self.tracked), self.default_timeout);
        set.add_condition(name, count)?;
        Ok(set)
    }

    /// Alias for [`Listener::begin_condition`]
    pub fn when(&self, name: &str, count: u64) -> Result<ConditionSet> {
        self.begin_condition(name, count)
    }

    /// Wait for a single firing of `name`
    pub fn when_once(&self, name: &str) -> Result<ConditionSet> {
        self.begin_condition(name, 1)
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("events", &self.tracked.keys().collect::<Vec<_>>())
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

/// Extension for starting a [`Listener`] directly from an event source
pub trait ListenExt: EventSource {
    /// Count each firing of the given event names
    fn listen_for<I, N>(&self, names: I) -> Result<Listener>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Listener::new(self, names)
    }
}

impl<S: EventSource + ?Sized> ListenExt for S {}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
