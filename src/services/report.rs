// ABOUTME: Report assembly over the ledger and the kit recommender
// ABOUTME: Resolves names and units, filters non-reportable nutrients out of kit items
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Report Assembly
//!
//! The read side of the engine. Every operation takes one storage snapshot
//! and computes from it, so a report can never mix state from before and
//! after a concurrent update. Report items carry resolved nutrient names
//! and units; kit items list only reportable nutrients' contributions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::errors::ReportResult;
use crate::intelligence::recommend_kits;
use crate::ledger::NutrientLedger;
use crate::models::{NutrientUnit, SupplementKit};
use crate::storage::{NutrientStore, StoreSnapshot};

/// One reportable nutrient in the personal report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientReportItem {
    /// Nutrient id
    pub nutrient_id: Uuid,
    /// Resolved nutrient name
    pub name: String,
    /// Unit all amounts below are expressed in
    pub unit: NutrientUnit,
    /// Target amount from the recommended intake
    pub recommended_amount: Decimal,
    /// Consumed amount; zero when nothing was recorded
    pub consumed_amount: Decimal,
}

/// One nutrient contribution within a recommended kit, names and units
/// resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitNutrientReportItem {
    /// Contributed nutrient id
    pub nutrient_id: Uuid,
    /// Resolved nutrient name
    pub nutrient_name: String,
    /// Unit the amount is expressed in
    pub unit: NutrientUnit,
    /// Contributed amount
    pub amount: Decimal,
}

/// One recommended supplement kit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementKitReportItem {
    /// Kit id
    pub kit_id: Uuid,
    /// Kit name
    pub name: String,
    /// Contributions for reportable nutrients only; a kit's contribution
    /// to a nutrient without a recommended intake is omitted
    pub nutrients: Vec<KitNutrientReportItem>,
}

/// The combined personal report: nutrient table plus kit recommendations,
/// both computed from the same snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalReport {
    /// When this report was assembled
    pub generated_at: DateTime<Utc>,
    /// Reportable nutrients with targets and consumed amounts
    pub nutrients: Vec<NutrientReportItem>,
    /// Kits accepted by the greedy selection, in acceptance order
    pub recommended_supplements: Vec<SupplementKitReportItem>,
}

/// Read-only report service over an injected store
#[derive(Debug, Clone)]
pub struct ReportService<S: NutrientStore> {
    store: S,
    config: RecommenderConfig,
}

impl<S: NutrientStore> ReportService<S> {
    /// Create a report service with the default kit budget
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, RecommenderConfig::default())
    }

    /// Create a report service with an explicit recommender configuration
    #[must_use]
    pub fn with_config(store: S, config: RecommenderConfig) -> Self {
        Self { store, config }
    }

    /// The nutrient table: every reportable nutrient with its recommended
    /// and consumed amounts, ordered by name
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ReportError::StorageFailure`] when the
    /// snapshot cannot be read.
    pub async fn nutrient_report(&self) -> ReportResult<Vec<NutrientReportItem>> {
        let snapshot = self.store.snapshot().await?;
        let ledger = build_ledger(&snapshot);
        Ok(nutrient_items(&ledger))
    }

    /// Kit recommendations for the current state, in acceptance order.
    /// Empty when no nutrient is reportable, the catalog is empty, or no
    /// kit improves the deviation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ReportError::StorageFailure`] when the
    /// snapshot cannot be read.
    pub async fn supplement_recommendations(&self) -> ReportResult<Vec<SupplementKitReportItem>> {
        let snapshot = self.store.snapshot().await?;
        let ledger = build_ledger(&snapshot);
        Ok(self.kit_items(&ledger, &snapshot.supplement_kits))
    }

    /// The combined personal report. Both halves are computed from a
    /// single snapshot so they always agree with each other.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ReportError::StorageFailure`] when the
    /// snapshot cannot be read.
    pub async fn personal_report(&self) -> ReportResult<PersonalReport> {
        let snapshot = self.store.snapshot().await?;
        let ledger = build_ledger(&snapshot);
        Ok(PersonalReport {
            generated_at: Utc::now(),
            nutrients: nutrient_items(&ledger),
            recommended_supplements: self.kit_items(&ledger, &snapshot.supplement_kits),
        })
    }

    fn kit_items(
        &self,
        ledger: &NutrientLedger,
        catalog: &[SupplementKit],
    ) -> Vec<SupplementKitReportItem> {
        recommend_kits(ledger, catalog, &self.config)
            .into_iter()
            .map(|ranked| {
                let nutrients = ranked
                    .kit
                    .nutrients
                    .iter()
                    .filter_map(|item| {
                        ledger.nutrient(item.nutrient_id).map(|nutrient| {
                            KitNutrientReportItem {
                                nutrient_id: item.nutrient_id,
                                nutrient_name: nutrient.name.clone(),
                                unit: nutrient.unit,
                                amount: item.amount,
                            }
                        })
                    })
                    .collect();
                SupplementKitReportItem {
                    kit_id: ranked.kit.id,
                    name: ranked.kit.name,
                    nutrients,
                }
            })
            .collect()
    }
}

fn build_ledger(snapshot: &StoreSnapshot) -> NutrientLedger {
    NutrientLedger::build(
        &snapshot.nutrients,
        &snapshot.recommended_intakes,
        &snapshot.current_consumptions,
    )
}

fn nutrient_items(ledger: &NutrientLedger) -> Vec<NutrientReportItem> {
    ledger
        .entries()
        .iter()
        .map(|entry| NutrientReportItem {
            nutrient_id: entry.nutrient.id,
            name: entry.nutrient.name.clone(),
            unit: entry.nutrient.unit,
            recommended_amount: entry.recommended_amount,
            consumed_amount: entry.consumed_amount,
        })
        .collect()
}
