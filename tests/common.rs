// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, seeded stores, and request builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrigap`
//!
//! This module provides common fixture setup functions to reduce
//! duplication across integration tests.

use anyhow::Result;
use nutrigap::models::{
    ConsumptionUpdate, KitNutrient, Nutrient, NutrientUnit, RecommendedIntakeUpdate, SupplementKit,
};
use nutrigap::seed::seed_store;
use nutrigap::storage::InMemoryStore;
use rust_decimal::Decimal;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard fixture: a store seeded with the default nutrient catalog,
/// daily targets, and the demo supplement kits
pub async fn create_seeded_store() -> Result<InMemoryStore> {
    init_test_logging();
    let store = InMemoryStore::new();
    seed_store(&store).await?;
    Ok(store)
}

/// Empty store with logging initialized
pub fn create_empty_store() -> InMemoryStore {
    init_test_logging();
    InMemoryStore::new()
}

/// Build a consumption update row
pub fn consumption(nutrient_id: Uuid, amount: i64) -> ConsumptionUpdate {
    ConsumptionUpdate {
        nutrient_id,
        consumed_amount: Decimal::from(amount),
    }
}

/// Build a recommended intake update row
pub fn intake_target(nutrient_id: Uuid, amount: i64) -> RecommendedIntakeUpdate {
    RecommendedIntakeUpdate {
        nutrient_id,
        recommended_amount: Decimal::from(amount),
    }
}

/// Build a nutrient reference row with a fresh id
pub fn nutrient(name: &str, unit: NutrientUnit) -> Nutrient {
    Nutrient {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        unit,
    }
}

/// Build a supplement kit with a fresh id from (nutrient id, amount) pairs
pub fn kit(name: &str, nutrients: &[(Uuid, i64)]) -> SupplementKit {
    SupplementKit {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        nutrients: nutrients
            .iter()
            .map(|&(nutrient_id, amount)| KitNutrient {
                nutrient_id,
                amount: Decimal::from(amount),
            })
            .collect(),
    }
}
