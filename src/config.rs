// ABOUTME: Engine configuration with environment variable overrides
// ABOUTME: Controls the kit budget used by the greedy recommender
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! Engine Configuration
//!
//! Environment-driven configuration, the same way the rest of the system
//! is configured: sensible defaults, explicit env var overrides, parse
//! failures surfaced instead of silently ignored.

use std::env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default number of kits the recommender may accept per report
pub const DEFAULT_MAX_KITS: usize = 3;

/// Configuration for the greedy kit recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Maximum number of kits a single recommendation may contain
    pub max_kits: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_kits: DEFAULT_MAX_KITS,
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from the environment.
    ///
    /// `NUTRIGAP_MAX_KITS` overrides the kit budget; when unset the default
    /// of [`DEFAULT_MAX_KITS`] applies.
    ///
    /// # Errors
    ///
    /// Returns an error when `NUTRIGAP_MAX_KITS` is set but does not parse
    /// as an unsigned integer.
    pub fn from_env() -> Result<Self> {
        let max_kits = match env::var("NUTRIGAP_MAX_KITS") {
            Ok(raw) => raw.parse().context("Invalid NUTRIGAP_MAX_KITS value")?,
            Err(_) => DEFAULT_MAX_KITS,
        };
        Ok(Self { max_kits })
    }

    /// Override the kit budget, builder style
    #[must_use]
    pub const fn with_max_kits(mut self, max_kits: usize) -> Self {
        self.max_kits = max_kits;
        self
    }
}
