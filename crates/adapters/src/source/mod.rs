// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event source implementations

mod local;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use local::LocalEventSource;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeEventSource, SourceCall};

use async_trait::async_trait;

/// A source that can deliver a firing on demand
#[async_trait]
pub trait EventEmitter: Send + Sync {
    /// Deliver one firing of `event` and wait for its handlers.
    ///
    /// Returns how many handlers ran.
    async fn emit(&self, event: &str) -> usize;
}
