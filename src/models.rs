// ABOUTME: Core domain models for nutrients, intakes, consumption and supplement kits
// ABOUTME: Defines the reference data and request types shared by storage and services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Data Models
//!
//! Core data structures used throughout the recommendation engine.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: Models are plain values; nothing here knows how
//!   rows are persisted
//! - **Exact Arithmetic**: All amounts are `rust_decimal::Decimal`, never
//!   floats, so deviation sums are reproducible
//! - **Serializable**: All models support JSON serialization for report
//!   consumers
//!
//! ## Core Models
//!
//! - `Nutrient`: reference-data row describing a trackable substance
//! - `RecommendedIntake`: target amount per nutrient; defines which
//!   nutrients are reportable
//! - `CurrentConsumption`: latest known intake per nutrient
//! - `SupplementKit`: a bundle of fixed nutrient contributions

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit of measure for nutrient amounts
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    /// Grams
    Gram,
    /// Milligrams
    Milligram,
    /// Micrograms
    Microgram,
    /// Milliliters, for liquid dosing
    Milliliter,
    /// International Units, for vitamins dosed by biological activity
    InternationalUnit,
}

impl NutrientUnit {
    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "gram",
            Self::Milligram => "milligram",
            Self::Microgram => "microgram",
            Self::Milliliter => "milliliter",
            Self::InternationalUnit => "international_unit",
        }
    }

    /// Short symbol for human-readable output (e.g. "mg")
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Microgram => "mcg",
            Self::Milliliter => "ml",
            Self::InternationalUnit => "IU",
        }
    }
}

impl Display for NutrientUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A trackable dietary substance. Reference data, never mutated by the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nutrient {
    /// Stable identifier
    pub id: Uuid,
    /// Human-readable name (e.g. "Vitamin C")
    pub name: String,
    /// Unit all amounts for this nutrient are expressed in
    pub unit: NutrientUnit,
}

/// Target daily amount for one nutrient. A nutrient with a recommended
/// intake is "reportable"; one without is invisible to reports and scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendedIntake {
    /// Nutrient this target applies to
    pub nutrient_id: Uuid,
    /// Target amount, in the nutrient's unit; never negative
    pub amount: Decimal,
}

/// Latest known intake for one nutrient. The whole set is replaced
/// wholesale on every consumption update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentConsumption {
    /// Nutrient this measurement applies to
    pub nutrient_id: Uuid,
    /// Consumed amount, in the nutrient's unit; never negative
    pub amount: Decimal,
}

/// One nutrient's contribution within a supplement kit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitNutrient {
    /// Contributed nutrient
    pub nutrient_id: Uuid,
    /// Contributed amount, in the nutrient's unit; never negative
    pub amount: Decimal,
}

/// A fixed bundle of nutrient contributions that can be added on top of
/// current consumption. Each nutrient appears at most once per kit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementKit {
    /// Stable identifier
    pub id: Uuid,
    /// Human-readable kit name
    pub name: String,
    /// Per-nutrient contributions
    pub nutrients: Vec<KitNutrient>,
}

/// One entry of a wholesale consumption update request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumptionUpdate {
    /// Nutrient being reported
    pub nutrient_id: Uuid,
    /// Measured intake; must be zero or positive
    pub consumed_amount: Decimal,
}

/// One entry of a recommended-intake upsert request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendedIntakeUpdate {
    /// Nutrient being targeted
    pub nutrient_id: Uuid,
    /// New target amount; must be zero or positive
    pub recommended_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrient_unit_serializes_snake_case() {
        let json = serde_json::to_string(&NutrientUnit::InternationalUnit).unwrap();
        assert_eq!(json, "\"international_unit\"");
        let back: NutrientUnit = serde_json::from_str("\"microgram\"").unwrap();
        assert_eq!(back, NutrientUnit::Microgram);
    }

    #[test]
    fn nutrient_unit_abbreviations() {
        assert_eq!(NutrientUnit::Gram.abbreviation(), "g");
        assert_eq!(NutrientUnit::Microgram.abbreviation(), "mcg");
        assert_eq!(NutrientUnit::InternationalUnit.abbreviation(), "IU");
    }
}
