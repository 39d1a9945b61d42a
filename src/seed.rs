// ABOUTME: Default nutrient catalog and demo supplement kits for seeding a store
// ABOUTME: Fixed UUIDs so demos, fixtures and docs can reference the same rows
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Seed Data
//!
//! The default reference catalog: five common nutrients with daily targets,
//! plus a small supplement kit catalog for demos and integration fixtures.
//! Ids are fixed so seeded stores are reproducible across runs.

use anyhow::Result;
use rust_decimal::Decimal;
use uuid::{uuid, Uuid};

use crate::models::{
    KitNutrient, Nutrient, NutrientUnit, RecommendedIntake, SupplementKit,
};
use crate::storage::{InMemoryStore, NutrientStore};

/// Fixed id of the seeded Protein nutrient
pub const PROTEIN_ID: Uuid = uuid!("d2834471-2a0d-4307-b7e9-a175d129a011");
/// Fixed id of the seeded Vitamin C nutrient
pub const VITAMIN_C_ID: Uuid = uuid!("e3934471-2a0d-4307-b7e9-a175d129a012");
/// Fixed id of the seeded Vitamin D nutrient
pub const VITAMIN_D_ID: Uuid = uuid!("d0e85755-1807-4d51-9edf-dbd110d2c5b2");
/// Fixed id of the seeded Water nutrient
pub const WATER_ID: Uuid = uuid!("5cbc1313-698a-46ea-91a4-06cc601e8a16");
/// Fixed id of the seeded Zinc nutrient
pub const ZINC_ID: Uuid = uuid!("43e5a276-4d69-4e6a-a846-43138ff43025");

/// The default nutrient reference rows
#[must_use]
pub fn default_nutrients() -> Vec<Nutrient> {
    vec![
        Nutrient {
            id: PROTEIN_ID,
            name: "Protein".to_owned(),
            unit: NutrientUnit::Gram,
        },
        Nutrient {
            id: VITAMIN_C_ID,
            name: "Vitamin C".to_owned(),
            unit: NutrientUnit::Milligram,
        },
        Nutrient {
            id: VITAMIN_D_ID,
            name: "Vitamin D".to_owned(),
            unit: NutrientUnit::Microgram,
        },
        Nutrient {
            id: WATER_ID,
            name: "Water".to_owned(),
            unit: NutrientUnit::Gram,
        },
        Nutrient {
            id: ZINC_ID,
            name: "Zinc".to_owned(),
            unit: NutrientUnit::Milligram,
        },
    ]
}

/// Default daily targets for the seeded nutrients
#[must_use]
pub fn default_recommended_intakes() -> Vec<RecommendedIntake> {
    vec![
        RecommendedIntake {
            nutrient_id: PROTEIN_ID,
            amount: Decimal::from(50),
        },
        RecommendedIntake {
            nutrient_id: VITAMIN_C_ID,
            amount: Decimal::from(90),
        },
        RecommendedIntake {
            nutrient_id: VITAMIN_D_ID,
            amount: Decimal::from(20),
        },
        RecommendedIntake {
            nutrient_id: WATER_ID,
            amount: Decimal::from(2000),
        },
        RecommendedIntake {
            nutrient_id: ZINC_ID,
            amount: Decimal::from(11),
        },
    ]
}

/// A small demo kit catalog covering the seeded nutrients
#[must_use]
pub fn demo_supplement_kits() -> Vec<SupplementKit> {
    vec![
        SupplementKit {
            id: uuid!("7f1c2ab0-93be-4f69-88a0-6f2f6f3c1e01"),
            name: "Daily Essentials".to_owned(),
            nutrients: vec![
                KitNutrient {
                    nutrient_id: VITAMIN_C_ID,
                    amount: Decimal::from(60),
                },
                KitNutrient {
                    nutrient_id: VITAMIN_D_ID,
                    amount: Decimal::from(10),
                },
                KitNutrient {
                    nutrient_id: ZINC_ID,
                    amount: Decimal::from(5),
                },
            ],
        },
        SupplementKit {
            id: uuid!("7f1c2ab0-93be-4f69-88a0-6f2f6f3c1e02"),
            name: "Immunity Plus".to_owned(),
            nutrients: vec![
                KitNutrient {
                    nutrient_id: VITAMIN_C_ID,
                    amount: Decimal::from(90),
                },
                KitNutrient {
                    nutrient_id: ZINC_ID,
                    amount: Decimal::from(11),
                },
            ],
        },
        SupplementKit {
            id: uuid!("7f1c2ab0-93be-4f69-88a0-6f2f6f3c1e03"),
            name: "Vitamin D Forte".to_owned(),
            nutrients: vec![KitNutrient {
                nutrient_id: VITAMIN_D_ID,
                amount: Decimal::from(20),
            }],
        },
        SupplementKit {
            id: uuid!("7f1c2ab0-93be-4f69-88a0-6f2f6f3c1e04"),
            name: "Protein Starter".to_owned(),
            nutrients: vec![KitNutrient {
                nutrient_id: PROTEIN_ID,
                amount: Decimal::from(25),
            }],
        },
    ]
}

/// Load the default catalog into a fresh in-memory store: nutrients and
/// kits through the reference-data loaders, recommended intakes through
/// the regular upsert path.
///
/// # Errors
///
/// Returns an error when the store rejects the recommended-intake upsert.
pub async fn seed_store(store: &InMemoryStore) -> Result<()> {
    store.load_nutrients(default_nutrients()).await;
    store.load_supplement_kits(demo_supplement_kits()).await;
    store
        .upsert_recommended_intakes(default_recommended_intakes())
        .await?;
    Ok(())
}
