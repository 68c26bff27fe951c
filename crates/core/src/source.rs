// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event source seam
//!
//! A listener only needs one capability from whatever delivers events:
//! registering a zero-argument async callback against an event name.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Future returned by an [`EventHandler`]
pub type HandlerFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Callback invoked once per event firing
pub type EventHandler = Arc<dyn Fn() -> HandlerFuture + Send + Sync + 'static>;

/// Wrap an async closure as an [`EventHandler`]
pub fn handler<F, Fut>(f: F) -> EventHandler
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move || Box::pin(f()) as HandlerFuture)
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("registration rejected for {event}: {reason}")]
    Rejected { event: String, reason: String },
    #[error("event source closed")]
    Closed,
}

/// Something that delivers named events to registered handlers.
///
/// Handlers for different names may be invoked concurrently. A handler
/// registered before `on` returns must see every firing that happens after.
pub trait EventSource: Send + Sync {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError>;
}

impl<S: EventSource + ?Sized> EventSource for Arc<S> {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError> {
        (**self).on(event, handler)
    }
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn on(&self, event: &str, handler: EventHandler) -> Result<(), SourceError> {
        (**self).on(event, handler)
    }
}
