// ABOUTME: Deviation scoring between intake totals and recommended targets
// ABOUTME: Pure L1 distance over the target's nutrient ids with exact decimal arithmetic
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

/// Total absolute deviation between intake totals and recommended targets.
///
/// Formula: `sum(|total(n) - target(n)|)` over every nutrient `n` in
/// `targets`, where a nutrient absent from `totals` counts as zero.
/// Nutrients present only in `totals` contribute nothing; the recommended
/// set alone defines which dimensions are scored.
///
/// Exact decimal arithmetic makes the result deterministic and independent
/// of map iteration order. Returns zero for an empty target set.
#[must_use]
pub fn total_deviation(
    totals: &HashMap<Uuid, Decimal>,
    targets: &HashMap<Uuid, Decimal>,
) -> Decimal {
    targets
        .iter()
        .map(|(nutrient_id, target)| {
            let total = totals.get(nutrient_id).copied().unwrap_or_default();
            (total - *target).abs()
        })
        .sum()
}
