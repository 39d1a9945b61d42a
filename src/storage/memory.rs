// ABOUTME: In-memory storage implementation backed by a single RwLock
// ABOUTME: Reference backend for tests, demos and embedding without a database
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NutrientStore, StoreSnapshot};
use crate::models::{CurrentConsumption, Nutrient, RecommendedIntake, SupplementKit};

/// All collections behind one lock so every mutation is atomic relative to
/// readers
#[derive(Debug, Default)]
struct State {
    nutrients: Vec<Nutrient>,
    recommended_intakes: Vec<RecommendedIntake>,
    current_consumptions: Vec<CurrentConsumption>,
    supplement_kits: Vec<SupplementKit>,
}

/// In-memory store over `Arc<RwLock<State>>`
///
/// A single `RwLock` guards all four collections. Writers take one write
/// guard for the whole mutation, so readers either see the state before a
/// replace or after it, never a half-applied one. `snapshot` clones every
/// collection under one read guard for the same reason.
///
/// Cloning the store clones the `Arc`; all clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the nutrient reference rows.
    ///
    /// Reference data is managed by the host application, not by the
    /// engine, so the loaders live on the concrete store rather than the
    /// [`NutrientStore`] trait.
    pub async fn load_nutrients(&self, nutrients: Vec<Nutrient>) {
        self.state.write().await.nutrients = nutrients;
    }

    /// Replace the supplement kit catalog. Catalog order is preserved and
    /// becomes the tie-break order during kit selection.
    pub async fn load_supplement_kits(&self, kits: Vec<SupplementKit>) {
        self.state.write().await.supplement_kits = kits;
    }
}

#[async_trait]
impl NutrientStore for InMemoryStore {
    async fn nutrients(&self) -> Result<Vec<Nutrient>> {
        Ok(self.state.read().await.nutrients.clone())
    }

    async fn snapshot(&self) -> Result<StoreSnapshot> {
        let state = self.state.read().await;
        Ok(StoreSnapshot {
            nutrients: state.nutrients.clone(),
            recommended_intakes: state.recommended_intakes.clone(),
            current_consumptions: state.current_consumptions.clone(),
            supplement_kits: state.supplement_kits.clone(),
        })
    }

    async fn replace_current_consumptions(
        &self,
        consumptions: Vec<CurrentConsumption>,
    ) -> Result<()> {
        let mut state = self.state.write().await;

        // Uniqueness check before touching state; a duplicate fails the
        // whole call with the previous consumption set intact
        let mut seen = HashSet::with_capacity(consumptions.len());
        for row in &consumptions {
            if !seen.insert(row.nutrient_id) {
                bail!(
                    "duplicate consumption row for nutrient {}",
                    row.nutrient_id
                );
            }
        }

        state.current_consumptions = consumptions;
        Ok(())
    }

    async fn upsert_recommended_intakes(&self, intakes: Vec<RecommendedIntake>) -> Result<()> {
        let mut state = self.state.write().await;
        for intake in intakes {
            if let Some(existing) = state
                .recommended_intakes
                .iter_mut()
                .find(|row| row.nutrient_id == intake.nutrient_id)
            {
                existing.amount = intake.amount;
            } else {
                state.recommended_intakes.push(intake);
            }
        }
        Ok(())
    }
}
