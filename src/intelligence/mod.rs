// ABOUTME: Intelligence module for nutrient-gap scoring and kit selection
// ABOUTME: Pure computation over ledger data, no storage or I/O dependencies
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! # Intelligence Module
//!
//! The computational core of the engine: deviation scoring over flat
//! nutrient maps and the greedy selection of supplement kits that best
//! close the remaining gap. Everything here is a pure function of its
//! inputs; storage snapshots are turned into ledgers before they arrive.

/// L1 deviation between intake totals and recommended targets
pub mod deviation;
/// Greedy supplement kit selection minimizing total deviation
pub mod recommender;

pub use deviation::total_deviation;
pub use recommender::{recommend_kits, RankedKit};
