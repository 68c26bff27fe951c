// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for listeners, counters and condition sets

use crate::source::SourceError;
use thiserror::Error;

/// Errors raised while building or waiting on event conditions.
///
/// The argument variants indicate a test-authoring mistake and are reported
/// at call time. [`Error::Timeout`] is the expected failure mode when the
/// awaited events did not happen in time.
#[derive(Debug, Error)]
pub enum Error {
    #[error("at least one event name is required")]
    NoEventNames,
    #[error("event name must not be empty")]
    EmptyEventName,
    #[error("event name listed more than once: {0}")]
    DuplicateEventName(String),
    #[error("the listener is not listening for {0}")]
    NotListening(String),
    #[error("the count ({observed}) of {event} failed to reach {threshold} before the timeout")]
    Timeout {
        event: String,
        threshold: u64,
        observed: u64,
    },
    #[error("event source error: {0}")]
    Source(#[from] SourceError),
    #[error("condition wait aborted: {0}")]
    Aborted(String),
}

impl Error {
    /// True for errors caused by invalid arguments at call time
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NoEventNames
                | Error::EmptyEventName
                | Error::DuplicateEventName(_)
                | Error::NotListening(_)
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
