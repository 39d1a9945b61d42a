// ABOUTME: Service layer composing validation, storage and the recommendation core
// ABOUTME: IntakeService mutates intake state; ReportService assembles read-only reports
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Service Layer
//!
//! The public operations of the engine. [`IntakeService`] owns the two
//! mutations (wholesale consumption replace, recommended-intake upsert)
//! and all request validation. [`ReportService`] owns the read side:
//! the nutrient table, the kit recommendations, and the combined personal
//! report, each computed from a single storage snapshot.

/// Consumption and recommended-intake updates with validation
pub mod intake;
/// Report assembly over ledger and recommender output
pub mod report;

pub use intake::IntakeService;
pub use report::{
    KitNutrientReportItem, NutrientReportItem, PersonalReport, ReportService,
    SupplementKitReportItem,
};
