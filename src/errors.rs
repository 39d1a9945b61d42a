// ABOUTME: Domain error types for intake validation and report assembly
// ABOUTME: Carries every offending nutrient id so callers can report all failures at once
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Report Error Types
//!
//! Centralized error handling for the recommendation engine:
//! - `ReportError` - validation and storage failures surfaced by the services
//! - `ReportResult` - result alias used across the service layer
//!
//! Validation variants carry the complete list of offending nutrient ids,
//! not just the first one found, so a single failed request tells the caller
//! everything that needs fixing.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for service-layer operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors surfaced by intake updates and report assembly.
///
/// Validation errors are detected before any state is touched; a failed
/// mutation leaves storage exactly as it was. `StorageFailure` wraps the
/// underlying store error with its full cause chain preserved.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Request payload was empty or structurally malformed
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the payload was rejected
        reason: String,
    },

    /// One or more nutrient ids do not exist in the reference set
    #[error("Unknown nutrient ids: {}", join_ids(.ids))]
    UnknownNutrient {
        /// Every unrecognized id, in first-seen order
        ids: Vec<Uuid>,
    },

    /// One or more amounts were negative
    #[error("Negative amount for nutrient ids: {}", join_ids(.ids))]
    InvalidAmount {
        /// Every nutrient id carrying a negative amount, in first-seen order
        ids: Vec<Uuid>,
    },

    /// The same nutrient id appeared more than once in a single request
    #[error("Duplicate nutrient ids in request: {}", join_ids(.ids))]
    DuplicateInput {
        /// Every duplicated id, in first-seen order
        ids: Vec<Uuid>,
    },

    /// The underlying store failed; the cause chain is preserved
    #[error("Storage operation failed: {0}")]
    StorageFailure(#[from] anyhow::Error),
}

impl ReportError {
    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an "unknown nutrient" error from the offending ids
    #[must_use]
    pub fn unknown_nutrients(ids: Vec<Uuid>) -> Self {
        Self::UnknownNutrient { ids }
    }

    /// Create an "invalid amount" error from the offending ids
    #[must_use]
    pub fn invalid_amounts(ids: Vec<Uuid>) -> Self {
        Self::InvalidAmount { ids }
    }

    /// Create a "duplicate input" error from the duplicated ids
    #[must_use]
    pub fn duplicate_inputs(ids: Vec<Uuid>) -> Self {
        Self::DuplicateInput { ids }
    }

    /// True when the error is a request-validation failure rather than an
    /// infrastructure fault
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::StorageFailure(_))
    }
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_nutrient_display_names_every_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let err = ReportError::unknown_nutrients(vec![a, b]);
        let rendered = err.to_string();
        assert!(rendered.contains(&a.to_string()));
        assert!(rendered.contains(&b.to_string()));
    }

    #[test]
    fn storage_failure_preserves_cause_chain() {
        let cause = anyhow::anyhow!("connection reset");
        let err = ReportError::from(cause.context("replacing consumption set"));
        let rendered = format!("{err}");
        assert!(rendered.contains("replacing consumption set"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn validation_classification() {
        assert!(ReportError::invalid_input("empty").is_validation());
        assert!(!ReportError::from(anyhow::anyhow!("io")).is_validation());
    }
}
