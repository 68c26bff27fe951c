// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tally-core: threshold-based event counting for test orchestration
//!
//! This crate provides:
//! - `Counter` - counts firings of one event and releases threshold waiters
//! - `Listener` - tracks a fixed set of event names from an `EventSource`
//! - `ConditionSet` - joint wait over several thresholds with one timeout

pub mod condition;
pub mod config;
pub mod counter;
pub mod error;
pub mod listener;
pub mod source;

pub use condition::{Condition, ConditionSet};
pub use config::{ConfigError, ListenerConfig};
pub use counter::Counter;
pub use error::{Error, Result};
pub use listener::{ListenExt, Listener};
pub use source::{handler, EventHandler, EventSource, HandlerFuture, SourceError};
