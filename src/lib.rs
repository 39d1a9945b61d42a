// ABOUTME: Library entry point for the nutrient-gap recommendation engine
// ABOUTME: Exposes intake updates, deviation scoring, kit selection and report assembly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

#![deny(unsafe_code)]

//! # Nutrigap
//!
//! A nutrient-gap recommendation engine: track consumed nutrient amounts
//! against recommended daily targets and find out which pre-defined
//! supplement kits best close the remaining gap.
//!
//! ## Features
//!
//! - **Deviation model**: L1 distance between total intake and the
//!   recommended targets, computed with exact decimal arithmetic
//! - **Greedy kit selection**: up to a configurable number of kits, each
//!   strictly improving the deviation, ties resolved by catalog order
//! - **Validated mutations**: wholesale consumption replace and
//!   recommended-intake upsert, both all-or-nothing
//! - **Pluggable storage**: an async trait seam with an in-memory
//!   reference implementation
//!
//! ## Architecture
//!
//! - **Models**: plain data types for nutrients, intakes and kits
//! - **Storage**: the `NutrientStore` trait and the in-memory backend
//! - **Ledger**: the per-report view of reportable nutrients
//! - **Intelligence**: pure deviation scoring and the greedy recommender
//! - **Services**: validation, mutation and report assembly
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrigap::seed::seed_store;
//! use nutrigap::services::ReportService;
//! use nutrigap::storage::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = InMemoryStore::new();
//!     seed_store(&store).await?;
//!
//!     let reports = ReportService::new(store);
//!     let report = reports.personal_report().await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Unified error handling for validation and storage failures
pub mod errors;

/// Deviation scoring and greedy kit selection
pub mod intelligence;

/// Request-scoped view of reportable nutrients
pub mod ledger;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Default nutrient catalog and demo kits
pub mod seed;

/// Intake updates and report assembly
pub mod services;

/// Storage abstraction and the in-memory backend
pub mod storage;
