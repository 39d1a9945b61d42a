// ABOUTME: Greedy supplement kit selection minimizing total nutrient deviation
// ABOUTME: Accepts up to max_kits kits, each strictly improving on the running deviation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Kit Recommender
//!
//! Greedy selection over the supplement kit catalog. Each round scores
//! every remaining kit by the deviation that would result from adding its
//! contributions to the running intake totals, then accepts the strictly
//! best one. Selection stops when no kit strictly improves the running
//! deviation, when the kit budget is exhausted, or when the pool is empty.
//!
//! The greedy result is not guaranteed to be globally optimal; that is the
//! accepted trade-off for a selection that is cheap, deterministic, and
//! easy to explain per accepted kit.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::intelligence::deviation::total_deviation;
use crate::ledger::NutrientLedger;
use crate::models::SupplementKit;

/// A kit accepted by the greedy selection, paired with the total deviation
/// that remained after adding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedKit {
    /// The accepted kit
    pub kit: SupplementKit,
    /// Total deviation after this kit's contributions were applied
    pub resulting_deviation: Decimal,
}

/// Select up to `config.max_kits` kits that greedily minimize the total
/// deviation from the ledger's recommended targets.
///
/// Scoring starts from the ledger's consumed amounts. Per round the
/// strictly smallest-deviation kit wins; ties go to the kit earliest in
/// catalog order. An accepted kit is removed from the pool, so no kit is
/// selected twice. Kits are returned in acceptance order.
///
/// Returns an empty list when the ledger or the catalog is empty, or when
/// no kit strictly improves on the current deviation. Never fails:
/// malformed amounts are rejected before they reach storage.
#[must_use]
pub fn recommend_kits(
    ledger: &NutrientLedger,
    catalog: &[SupplementKit],
    config: &RecommenderConfig,
) -> Vec<RankedKit> {
    if ledger.is_empty() || catalog.is_empty() {
        return Vec::new();
    }

    let targets = ledger.recommended_amounts();
    let mut totals = ledger.consumed_amounts();
    let mut current_deviation = total_deviation(&totals, &targets);

    let mut pool: Vec<&SupplementKit> = catalog.iter().collect();
    let mut accepted = Vec::new();

    for _ in 0..config.max_kits {
        // Strict < keeps the earliest kit in catalog order on ties
        let mut best: Option<(usize, Decimal)> = None;
        for (position, kit) in pool.iter().enumerate() {
            let candidate = deviation_with_kit(&totals, &targets, kit);
            if best.is_none_or(|(_, score)| candidate < score) {
                best = Some((position, candidate));
            }
        }

        let Some((position, score)) = best else {
            break;
        };
        if score >= current_deviation {
            break;
        }

        let kit = pool.remove(position);
        apply_contributions(&mut totals, kit);
        current_deviation = score;
        debug!(kit = %kit.name, deviation = %score, "accepted supplement kit");
        accepted.push(RankedKit {
            kit: kit.clone(),
            resulting_deviation: score,
        });
    }

    accepted
}

/// Deviation that would result from adding the kit's contributions to the
/// current totals. Works on a scratch copy; the running totals are only
/// advanced for kits that are actually accepted.
fn deviation_with_kit(
    totals: &HashMap<Uuid, Decimal>,
    targets: &HashMap<Uuid, Decimal>,
    kit: &SupplementKit,
) -> Decimal {
    let mut combined = totals.clone();
    apply_contributions(&mut combined, kit);
    total_deviation(&combined, targets)
}

fn apply_contributions(totals: &mut HashMap<Uuid, Decimal>, kit: &SupplementKit) {
    for item in &kit.nutrients {
        *totals.entry(item.nutrient_id).or_default() += item.amount;
    }
}
