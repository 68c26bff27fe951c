// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced event source wrapper for consistent observability

use crate::source::EventEmitter;
use async_trait::async_trait;
use std::sync::Arc;
use tally_core::{EventHandler, EventSource, HandlerFuture, SourceError};

/// Wrapper that adds tracing to any EventSource
#[derive(Clone)]
pub struct TracedEventSource<S> {
    inner: S,
}

impl<S> TracedEventSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: EventSource> EventSource for TracedEventSource<S> {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError> {
        let span = tracing::info_span!("source.on", event);
        let _guard = span.enter();

        // Precondition: names are never empty
        if event.is_empty() {
            tracing::error!("empty event name");
            return Err(SourceError::Rejected {
                event: String::new(),
                reason: "event name must not be empty".to_string(),
            });
        }

        let name: Arc<str> = Arc::from(event);
        let traced: EventHandler = Arc::new(move || {
            let name = Arc::clone(&name);
            let delivery = handler();
            Box::pin(async move {
                let start = std::time::Instant::now();
                delivery.await;
                tracing::trace!(
                    event = %name,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "delivered"
                );
            }) as HandlerFuture
        });

        let result = self.inner.on(event, traced);
        match &result {
            Ok(()) => tracing::info!("registered"),
            Err(e) => tracing::error!(error = %e, "registration failed"),
        }

        result
    }
}

#[async_trait]
impl<S: EventEmitter> EventEmitter for TracedEventSource<S> {
    async fn emit(&self, event: &str) -> usize {
        let start = std::time::Instant::now();
        let handlers = self.inner.emit(event).await;
        tracing::debug!(
            event,
            handlers,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "emitted"
        );
        handlers
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
