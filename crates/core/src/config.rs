// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener configuration
//!
//! ```toml
//! default_timeout = "5s"
//! events = ["itemProcessed", "jobDone"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listener config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which events to count and how long conditions wait by default
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
    /// Event names to track
    pub events: Vec<String>,
    /// Timeout for new condition sets; zero waits without bound
    #[serde(default, with = "humantime_serde")]
    pub default_timeout: Duration,
}

impl ListenerConfig {
    pub fn new<I, N>(events: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
            default_timeout: Duration::ZERO,
        }
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
