// ABOUTME: Criterion benchmarks for deviation scoring and greedy kit selection
// ABOUTME: Measures recommendation latency across catalog and ledger sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrigap Project

//! Criterion benchmarks for the recommendation engine.
//!
//! Measures total deviation scoring and greedy kit selection latency
//! across synthetic nutrient ledgers and kit catalogs.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrigap::config::RecommenderConfig;
use nutrigap::intelligence::{recommend_kits, total_deviation};
use nutrigap::ledger::NutrientLedger;
use nutrigap::models::{
    CurrentConsumption, KitNutrient, Nutrient, NutrientUnit, RecommendedIntake, SupplementKit,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Deterministic nutrient id for fixture row `index`
fn nutrient_id(index: usize) -> Uuid {
    Uuid::from_u128(0x1000 + index as u128)
}

/// Build a ledger of `count` nutrients with staggered targets and partial
/// consumption so every row carries a non-trivial gap
fn generate_ledger(count: usize) -> NutrientLedger {
    let nutrients: Vec<Nutrient> = (0..count)
        .map(|index| Nutrient {
            id: nutrient_id(index),
            name: format!("Nutrient {index}"),
            unit: NutrientUnit::Milligram,
        })
        .collect();
    let recommended: Vec<RecommendedIntake> = (0..count)
        .map(|index| RecommendedIntake {
            nutrient_id: nutrient_id(index),
            amount: Decimal::from(50 + (index * 7) % 100),
        })
        .collect();
    let consumed: Vec<CurrentConsumption> = (0..count)
        .map(|index| CurrentConsumption {
            nutrient_id: nutrient_id(index),
            amount: Decimal::from((index * 3) % 40),
        })
        .collect();

    NutrientLedger::build(&nutrients, &recommended, &consumed)
}

/// Build a catalog of `count` kits, each covering three adjacent nutrients
/// out of a pool of `nutrient_pool` ids
fn generate_catalog(count: usize, nutrient_pool: usize) -> Vec<SupplementKit> {
    (0..count)
        .map(|index| SupplementKit {
            id: Uuid::from_u128(0x9000 + index as u128),
            name: format!("Kit {index}"),
            nutrients: (0..3)
                .map(|offset| KitNutrient {
                    nutrient_id: nutrient_id((index + offset) % nutrient_pool),
                    amount: Decimal::from(5 + index % 20),
                })
                .collect(),
        })
        .collect()
}

fn bench_total_deviation(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_deviation");

    for count in [10_usize, 100, 1000] {
        let ledger = generate_ledger(count);
        let totals = ledger.consumed_amounts();
        let targets = ledger.recommended_amounts();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("score", count),
            &(totals, targets),
            |b, (totals, targets)| {
                b.iter(|| total_deviation(black_box(totals), black_box(targets)));
            },
        );
    }

    group.finish();
}

fn bench_kit_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("kit_selection");

    let ledger = generate_ledger(50);
    let config = RecommenderConfig::default();

    for count in [10_usize, 100, 500] {
        let catalog = generate_catalog(count, 50);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("recommend_kits", count),
            &catalog,
            |b, catalog| {
                b.iter(|| recommend_kits(black_box(&ledger), black_box(catalog), &config));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_total_deviation, bench_kit_selection);
criterion_main!(benches);
