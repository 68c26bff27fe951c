// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::EventEmitter;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tally_core::{EventHandler, EventSource, SourceError};

/// Recorded source call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    On { event: String },
    Fire { event: String, handlers: usize },
}

/// Fake event source for testing
#[derive(Clone, Default)]
pub struct FakeEventSource {
    handlers: Arc<Mutex<HashMap<String, Vec<EventHandler>>>>,
    rejected: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<SourceCall>>>,
}

impl FakeEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make registration for `event` fail
    pub fn reject(&self, event: &str) {
        self.rejected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(event.to_string());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Event names registered so far, in registration order
    pub fn registered(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SourceCall::On { event } => Some(event),
                SourceCall::Fire { .. } => None,
            })
            .collect()
    }

    /// Fire `event` once, awaiting its handlers
    pub async fn fire(&self, event: &str) -> usize {
        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .cloned()
            .unwrap_or_default();
        for handler in &handlers {
            handler().await;
        }
        self.record(SourceCall::Fire {
            event: event.to_string(),
            handlers: handlers.len(),
        });
        handlers.len()
    }

    /// Fire `event` `times` times in sequence
    pub async fn fire_n(&self, event: &str, times: usize) {
        for _ in 0..times {
            self.fire(event).await;
        }
    }

    fn record(&self, call: SourceCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl EventSource for FakeEventSource {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError> {
        if self
            .rejected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(event)
        {
            return Err(SourceError::Rejected {
                event: event.to_string(),
                reason: "rejected by fake".to_string(),
            });
        }

        self.handlers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(event.to_string())
            .or_default()
            .push(handler);
        self.record(SourceCall::On {
            event: event.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl EventEmitter for FakeEventSource {
    async fn emit(&self, event: &str) -> usize {
        self.fire(event).await
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
