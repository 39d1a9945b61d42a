// ABOUTME: Integration tests for the intake update service
// ABOUTME: Tests the validation matrix and all-or-nothing storage semantics
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use nutrigap::errors::ReportError;
use nutrigap::seed::{PROTEIN_ID, VITAMIN_C_ID, WATER_ID, ZINC_ID};
use nutrigap::services::IntakeService;
use nutrigap::storage::NutrientStore;
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::test]
async fn test_empty_consumption_update_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);

    let err = service.update_consumption(vec![]).await.unwrap_err();
    assert!(matches!(err, ReportError::InvalidInput { .. }));

    Ok(())
}

#[tokio::test]
async fn test_unknown_nutrient_in_consumption_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);
    let ghost = Uuid::new_v4();

    let err = service
        .update_consumption(vec![
            common::consumption(PROTEIN_ID, 30),
            common::consumption(ghost, 10),
        ])
        .await
        .unwrap_err();

    match err {
        ReportError::UnknownNutrient { ids } => assert_eq!(ids, vec![ghost]),
        other => panic!("expected UnknownNutrient, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_unknown_check_runs_before_amount_check() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);
    let ghost = Uuid::new_v4();

    // The ghost id also carries a negative amount; the unknown-id failure
    // must win because it is checked first
    let err = service
        .update_consumption(vec![common::consumption(ghost, -5)])
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::UnknownNutrient { .. }));

    Ok(())
}

#[tokio::test]
async fn test_negative_consumption_amounts_all_reported() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);

    let err = service
        .update_consumption(vec![
            common::consumption(PROTEIN_ID, -1),
            common::consumption(VITAMIN_C_ID, 40),
            common::consumption(ZINC_ID, -3),
        ])
        .await
        .unwrap_err();

    match err {
        ReportError::InvalidAmount { ids } => {
            assert_eq!(ids, vec![PROTEIN_ID, ZINC_ID]);
        }
        other => panic!("expected InvalidAmount, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_zero_consumption_amount_is_valid() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    service
        .update_consumption(vec![common::consumption(WATER_ID, 0)])
        .await?;

    let snapshot = store.snapshot().await?;
    assert_eq!(snapshot.current_consumptions.len(), 1);
    assert_eq!(snapshot.current_consumptions[0].amount, Decimal::ZERO);

    Ok(())
}

#[tokio::test]
async fn test_consumption_update_replaces_previous_set() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    service
        .update_consumption(vec![
            common::consumption(PROTEIN_ID, 30),
            common::consumption(VITAMIN_C_ID, 25),
        ])
        .await?;

    // The second update is the whole truth; the protein row must be gone
    service
        .update_consumption(vec![common::consumption(WATER_ID, 1500)])
        .await?;

    let snapshot = store.snapshot().await?;
    assert_eq!(snapshot.current_consumptions.len(), 1);
    assert_eq!(snapshot.current_consumptions[0].nutrient_id, WATER_ID);

    Ok(())
}

#[tokio::test]
async fn test_repeated_consumption_update_is_idempotent() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    let rows = vec![
        common::consumption(PROTEIN_ID, 30),
        common::consumption(VITAMIN_C_ID, 25),
    ];

    service.update_consumption(rows.clone()).await?;
    let after_first = store.snapshot().await?.current_consumptions;

    service.update_consumption(rows).await?;
    let after_second = store.snapshot().await?.current_consumptions;

    assert_eq!(after_first, after_second);

    Ok(())
}

#[tokio::test]
async fn test_rejected_consumption_update_leaves_state_untouched() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    service
        .update_consumption(vec![common::consumption(PROTEIN_ID, 30)])
        .await?;

    let err = service
        .update_consumption(vec![
            common::consumption(VITAMIN_C_ID, 25),
            common::consumption(Uuid::new_v4(), 10),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::UnknownNutrient { .. }));

    let snapshot = store.snapshot().await?;
    assert_eq!(snapshot.current_consumptions.len(), 1);
    assert_eq!(snapshot.current_consumptions[0].nutrient_id, PROTEIN_ID);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_consumption_ids_surface_as_storage_failure() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    service
        .update_consumption(vec![common::consumption(PROTEIN_ID, 30)])
        .await?;

    let err = service
        .update_consumption(vec![
            common::consumption(VITAMIN_C_ID, 25),
            common::consumption(VITAMIN_C_ID, 30),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::StorageFailure(_)));

    // The store rejected the replacement before applying any of it
    let snapshot = store.snapshot().await?;
    assert_eq!(snapshot.current_consumptions.len(), 1);
    assert_eq!(snapshot.current_consumptions[0].nutrient_id, PROTEIN_ID);

    Ok(())
}

#[tokio::test]
async fn test_empty_recommended_intake_update_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);

    let err = service.update_recommended_intake(vec![]).await.unwrap_err();
    assert!(matches!(err, ReportError::InvalidInput { .. }));

    Ok(())
}

#[tokio::test]
async fn test_unknown_nutrient_in_recommended_intake_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);
    let ghost = Uuid::new_v4();

    let err = service
        .update_recommended_intake(vec![common::intake_target(ghost, 40)])
        .await
        .unwrap_err();

    match err {
        ReportError::UnknownNutrient { ids } => assert_eq!(ids, vec![ghost]),
        other => panic!("expected UnknownNutrient, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_duplicate_recommended_intake_ids_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store.clone());

    let err = service
        .update_recommended_intake(vec![
            common::intake_target(PROTEIN_ID, 55),
            common::intake_target(ZINC_ID, 12),
            common::intake_target(PROTEIN_ID, 60),
        ])
        .await
        .unwrap_err();

    match err {
        ReportError::DuplicateInput { ids } => assert_eq!(ids, vec![PROTEIN_ID]),
        other => panic!("expected DuplicateInput, got {other:?}"),
    }

    // Even the non-duplicated zinc row must not have been written
    let snapshot = store.snapshot().await?;
    let zinc = snapshot
        .recommended_intakes
        .iter()
        .find(|row| row.nutrient_id == ZINC_ID)
        .unwrap();
    assert_eq!(zinc.amount, Decimal::from(11));

    Ok(())
}

#[tokio::test]
async fn test_negative_recommended_intake_rejected() -> Result<()> {
    let store = common::create_seeded_store().await?;
    let service = IntakeService::new(store);

    let err = service
        .update_recommended_intake(vec![common::intake_target(PROTEIN_ID, -50)])
        .await
        .unwrap_err();

    match err {
        ReportError::InvalidAmount { ids } => assert_eq!(ids, vec![PROTEIN_ID]),
        other => panic!("expected InvalidAmount, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_recommended_intake_upsert_overwrites_and_inserts() -> Result<()> {
    let store = common::create_empty_store();
    store
        .load_nutrients(nutrigap::seed::default_nutrients())
        .await;
    let service = IntakeService::new(store.clone());

    // First write creates the rows
    service
        .update_recommended_intake(vec![
            common::intake_target(PROTEIN_ID, 50),
            common::intake_target(ZINC_ID, 11),
        ])
        .await?;

    // Second write revises protein and adds water
    service
        .update_recommended_intake(vec![
            common::intake_target(PROTEIN_ID, 65),
            common::intake_target(WATER_ID, 2000),
        ])
        .await?;

    let snapshot = store.snapshot().await?;
    assert_eq!(snapshot.recommended_intakes.len(), 3);

    let amount_for = |id: Uuid| {
        snapshot
            .recommended_intakes
            .iter()
            .find(|row| row.nutrient_id == id)
            .map(|row| row.amount)
    };
    assert_eq!(amount_for(PROTEIN_ID), Some(Decimal::from(65)));
    assert_eq!(amount_for(ZINC_ID), Some(Decimal::from(11)));
    assert_eq!(amount_for(WATER_ID), Some(Decimal::from(2000)));

    Ok(())
}
