// ABOUTME: Request-scoped ledger of reportable nutrients with recommended and consumed amounts
// ABOUTME: Built once per report from a storage snapshot; feeds the deviation and kit scoring
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Nutrient Ledger
//!
//! The ledger is the immutable, point-in-time view the engine computes on.
//! It contains only reportable nutrients (those with a recommended intake),
//! pairing each with its target and its consumed amount, where a missing
//! consumption row counts as zero. Entries are sorted by nutrient name then
//! id so report output is deterministic regardless of storage iteration
//! order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{CurrentConsumption, Nutrient, RecommendedIntake};

/// One reportable nutrient with its target and consumed amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// The nutrient reference row
    pub nutrient: Nutrient,
    /// Target amount from the recommended intake
    pub recommended_amount: Decimal,
    /// Consumed amount; zero when no consumption row exists
    pub consumed_amount: Decimal,
}

/// Immutable view of all reportable nutrients for one report computation
#[derive(Debug, Clone, Default)]
pub struct NutrientLedger {
    entries: Vec<LedgerEntry>,
    index: HashMap<Uuid, usize>,
}

impl NutrientLedger {
    /// Build a ledger from reference nutrients, recommended intakes and the
    /// current consumption set.
    ///
    /// Nutrients without a recommended intake are dropped. Recommended or
    /// consumed rows referencing a nutrient id absent from the reference
    /// set are ignored; upstream validation prevents them from being
    /// written in the first place.
    #[must_use]
    pub fn build(
        nutrients: &[Nutrient],
        recommended: &[RecommendedIntake],
        consumed: &[CurrentConsumption],
    ) -> Self {
        let targets: HashMap<Uuid, Decimal> = recommended
            .iter()
            .map(|r| (r.nutrient_id, r.amount))
            .collect();
        let intake: HashMap<Uuid, Decimal> =
            consumed.iter().map(|c| (c.nutrient_id, c.amount)).collect();

        let mut entries: Vec<LedgerEntry> = nutrients
            .iter()
            .filter_map(|nutrient| {
                targets.get(&nutrient.id).map(|target| LedgerEntry {
                    nutrient: nutrient.clone(),
                    recommended_amount: *target,
                    consumed_amount: intake.get(&nutrient.id).copied().unwrap_or_default(),
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            a.nutrient
                .name
                .cmp(&b.nutrient.name)
                .then_with(|| a.nutrient.id.cmp(&b.nutrient.id))
        });

        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.nutrient.id, position))
            .collect();

        Self { entries, index }
    }

    /// Reportable entries in report order (name, then id)
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of reportable nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no nutrient has a recommended intake
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a reportable nutrient's reference row by id
    #[must_use]
    pub fn nutrient(&self, nutrient_id: Uuid) -> Option<&Nutrient> {
        self.index
            .get(&nutrient_id)
            .and_then(|position| self.entries.get(*position))
            .map(|entry| &entry.nutrient)
    }

    /// Flat target map consumed by the deviation calculator
    #[must_use]
    pub fn recommended_amounts(&self) -> HashMap<Uuid, Decimal> {
        self.entries
            .iter()
            .map(|entry| (entry.nutrient.id, entry.recommended_amount))
            .collect()
    }

    /// Flat consumed-amount map consumed by the deviation calculator
    #[must_use]
    pub fn consumed_amounts(&self) -> HashMap<Uuid, Decimal> {
        self.entries
            .iter()
            .map(|entry| (entry.nutrient.id, entry.consumed_amount))
            .collect()
    }
}
