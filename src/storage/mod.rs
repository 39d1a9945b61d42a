// ABOUTME: Storage abstraction for nutrient reference data, intakes and supplement kits
// ABOUTME: Trait seam keeping the engine independent of any persistence technology
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Storage Layer
//!
//! The engine never talks to a database directly. It reads and writes
//! through [`NutrientStore`], an async trait whose implementations decide
//! how rows are actually kept. The in-memory implementation in
//! [`memory`] is the reference backend and the one the tests run against.
//!
//! Mutations are all-or-nothing: a failed call leaves the store exactly as
//! it was. Reads of the whole state go through [`NutrientStore::snapshot`]
//! so one report computation sees a single consistent point in time.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{CurrentConsumption, Nutrient, RecommendedIntake, SupplementKit};

pub mod memory;

pub use memory::InMemoryStore;

/// Point-in-time view of every collection the engine reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All nutrient reference rows
    pub nutrients: Vec<Nutrient>,
    /// All recommended intake targets
    pub recommended_intakes: Vec<RecommendedIntake>,
    /// The current consumption set
    pub current_consumptions: Vec<CurrentConsumption>,
    /// The supplement kit catalog, in stable catalog order
    pub supplement_kits: Vec<SupplementKit>,
}

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the service layer. Nutrients and supplement
/// kits are reference data managed by the host application; the trait
/// deliberately exposes no way to write them.
#[async_trait]
pub trait NutrientStore: Send + Sync + Clone {
    /// All nutrient reference rows
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    async fn nutrients(&self) -> Result<Vec<Nutrient>>;

    /// One consistent view of every collection
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    async fn snapshot(&self) -> Result<StoreSnapshot>;

    /// Atomically delete the entire current consumption set and insert the
    /// given rows in its place. At most one row per nutrient id; a
    /// duplicate violates the store's uniqueness constraint and fails the
    /// whole call with prior state intact.
    ///
    /// # Errors
    ///
    /// Returns an error on a uniqueness violation or when the underlying
    /// store cannot be written.
    async fn replace_current_consumptions(
        &self,
        consumptions: Vec<CurrentConsumption>,
    ) -> Result<()>;

    /// Atomically upsert the given recommended intakes: overwrite the
    /// amount where a target for the nutrient exists, insert a new row
    /// where it does not.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    async fn upsert_recommended_intakes(&self, intakes: Vec<RecommendedIntake>) -> Result<()>;
}
