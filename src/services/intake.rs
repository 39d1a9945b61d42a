// ABOUTME: Intake update service validating requests against the nutrient reference set
// ABOUTME: Wholesale consumption replace and recommended-intake upsert, both all-or-nothing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Intake Updates
//!
//! Both mutations validate completely before touching storage, so a failed
//! request can never leave partial state behind. Validation failures carry
//! every offending nutrient id, not just the first.
//!
//! The two operations are deliberately asymmetric: consumption is replaced
//! wholesale (the new set is the whole truth), while recommended intakes
//! are upserted individually (targets accumulate and get revised). Only
//! the upsert path checks for duplicates; a duplicated id in a consumption
//! request trips the store's per-nutrient uniqueness instead and surfaces
//! as a storage failure.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ReportError, ReportResult};
use crate::models::{
    ConsumptionUpdate, CurrentConsumption, RecommendedIntake, RecommendedIntakeUpdate,
};
use crate::storage::NutrientStore;

/// Service for intake mutations over an injected store
#[derive(Debug, Clone)]
pub struct IntakeService<S: NutrientStore> {
    store: S,
}

impl<S: NutrientStore> IntakeService<S> {
    /// Create a new intake service
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replace the entire current consumption set with the given updates.
    ///
    /// Validation order: the input must be non-empty, every nutrient id
    /// must exist in the reference set, and no amount may be negative.
    /// The first failing check wins and nothing is written.
    ///
    /// # Errors
    ///
    /// - [`ReportError::InvalidInput`] when `updates` is empty
    /// - [`ReportError::UnknownNutrient`] naming every id missing from the
    ///   reference set
    /// - [`ReportError::InvalidAmount`] naming every nutrient id with a
    ///   negative amount
    /// - [`ReportError::StorageFailure`] when the store rejects the
    ///   replacement, including duplicate nutrient ids in the request
    pub async fn update_consumption(&self, updates: Vec<ConsumptionUpdate>) -> ReportResult<()> {
        if updates.is_empty() {
            warn!("rejected consumption update: empty input");
            return Err(ReportError::invalid_input(
                "consumption update must contain at least one entry",
            ));
        }

        let known = self.known_nutrient_ids().await?;
        let unknown = distinct_ids(
            updates
                .iter()
                .map(|update| update.nutrient_id)
                .filter(|id| !known.contains(id)),
        );
        if !unknown.is_empty() {
            warn!(
                count = unknown.len(),
                "rejected consumption update: unknown nutrient ids"
            );
            return Err(ReportError::unknown_nutrients(unknown));
        }

        let negative = distinct_ids(
            updates
                .iter()
                .filter(|update| update.consumed_amount < Decimal::ZERO)
                .map(|update| update.nutrient_id),
        );
        if !negative.is_empty() {
            warn!(
                count = negative.len(),
                "rejected consumption update: negative amounts"
            );
            return Err(ReportError::invalid_amounts(negative));
        }

        let rows: Vec<CurrentConsumption> = updates
            .into_iter()
            .map(|update| CurrentConsumption {
                nutrient_id: update.nutrient_id,
                amount: update.consumed_amount,
            })
            .collect();
        let count = rows.len();
        self.store.replace_current_consumptions(rows).await?;
        info!(rows = count, "replaced current consumption set");
        Ok(())
    }

    /// Upsert recommended intake targets: overwrite the amount where a
    /// target exists, create the row where it does not.
    ///
    /// Validation order: the input must be non-empty, every nutrient id
    /// must exist in the reference set, no id may appear twice in the same
    /// request, and no amount may be negative. The first failing check
    /// wins and nothing is written.
    ///
    /// # Errors
    ///
    /// - [`ReportError::InvalidInput`] when `updates` is empty
    /// - [`ReportError::UnknownNutrient`] naming every id missing from the
    ///   reference set
    /// - [`ReportError::DuplicateInput`] naming every id that appears more
    ///   than once
    /// - [`ReportError::InvalidAmount`] naming every nutrient id with a
    ///   negative amount
    /// - [`ReportError::StorageFailure`] when the store rejects the upsert
    pub async fn update_recommended_intake(
        &self,
        updates: Vec<RecommendedIntakeUpdate>,
    ) -> ReportResult<()> {
        if updates.is_empty() {
            warn!("rejected recommended intake update: empty input");
            return Err(ReportError::invalid_input(
                "recommended intake update must contain at least one entry",
            ));
        }

        let known = self.known_nutrient_ids().await?;
        let distinct = distinct_ids(updates.iter().map(|update| update.nutrient_id));
        let unknown: Vec<Uuid> = distinct
            .iter()
            .copied()
            .filter(|id| !known.contains(id))
            .collect();
        if !unknown.is_empty() {
            warn!(
                count = unknown.len(),
                "rejected recommended intake update: unknown nutrient ids"
            );
            return Err(ReportError::unknown_nutrients(unknown));
        }

        if updates.len() > distinct.len() {
            let duplicated = duplicated_ids(updates.iter().map(|update| update.nutrient_id));
            warn!(
                count = duplicated.len(),
                "rejected recommended intake update: duplicate nutrient ids"
            );
            return Err(ReportError::duplicate_inputs(duplicated));
        }

        let negative = distinct_ids(
            updates
                .iter()
                .filter(|update| update.recommended_amount < Decimal::ZERO)
                .map(|update| update.nutrient_id),
        );
        if !negative.is_empty() {
            warn!(
                count = negative.len(),
                "rejected recommended intake update: negative amounts"
            );
            return Err(ReportError::invalid_amounts(negative));
        }

        let rows: Vec<RecommendedIntake> = updates
            .into_iter()
            .map(|update| RecommendedIntake {
                nutrient_id: update.nutrient_id,
                amount: update.recommended_amount,
            })
            .collect();
        let count = rows.len();
        self.store.upsert_recommended_intakes(rows).await?;
        info!(rows = count, "upserted recommended intakes");
        Ok(())
    }

    async fn known_nutrient_ids(&self) -> ReportResult<HashSet<Uuid>> {
        let nutrients = self.store.nutrients().await?;
        Ok(nutrients.into_iter().map(|nutrient| nutrient.id).collect())
    }
}

/// Deduplicate ids preserving first-seen order
fn distinct_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

/// Ids that occur more than once, each reported once in first-seen order
fn duplicated_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    let mut flagged = HashSet::new();
    let mut duplicated = Vec::new();
    for id in ids {
        if !seen.insert(id) && flagged.insert(id) {
            duplicated.push(id);
        }
    }
    duplicated
}
