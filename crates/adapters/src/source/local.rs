// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process event source
//!
//! Routes named firings to every handler registered for that name.

use super::EventEmitter;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tally_core::{EventHandler, EventSource, SourceError};

/// Event source that lives in the current process
pub struct LocalEventSource {
    handlers: Arc<RwLock<HashMap<String, Vec<EventHandler>>>>,
    closed: Arc<AtomicBool>,
}

impl LocalEventSource {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run every handler for `event` in registration order.
    ///
    /// Returns how many handlers ran.
    pub async fn emit(&self, event: &str) -> usize {
        let handlers = self.handlers_for(event);
        for handler in &handlers {
            handler().await;
        }
        handlers.len()
    }

    /// Spawn every handler for `event` on the current runtime without waiting
    pub fn emit_detached(&self, event: &str) -> usize {
        let handlers = self.handlers_for(event);
        for handler in &handlers {
            tokio::spawn(handler());
        }
        handlers.len()
    }

    /// Number of handlers registered for `event`
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Names with at least one handler, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Stop accepting registrations and delivering events
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.handlers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn handlers_for(&self, event: &str) -> Vec<EventHandler> {
        if self.is_closed() {
            return Vec::new();
        }
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .cloned()
            .unwrap_or_default()
    }
}

impl EventSource for LocalEventSource {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError> {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        // Checked under the write lock so a concurrent close() cannot be missed
        if self.is_closed() {
            return Err(SourceError::Closed);
        }
        handlers.entry(event.to_string()).or_default().push(handler);
        Ok(())
    }
}

#[async_trait]
impl EventEmitter for LocalEventSource {
    async fn emit(&self, event: &str) -> usize {
        LocalEventSource::emit(self, event).await
    }
}

impl Default for LocalEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LocalEventSource {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            closed: Arc::clone(&self.closed),
        }
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
