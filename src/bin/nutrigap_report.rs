// ABOUTME: Demo binary that seeds an in-memory store, records a sample consumption
// ABOUTME: set, and prints the resulting personal nutrition report as JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutrigap Project

//! Personal nutrition report demo.
//!
//! Seeds the in-memory store with the default nutrient catalog, records a
//! sample consumption set, and prints the combined report (nutrient ledger
//! plus ranked supplement kits) to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Full report with the default consumption sample
//! cargo run --bin nutrigap-report
//!
//! # Report against a blank consumption ledger
//! cargo run --bin nutrigap-report -- --skip-consumption
//!
//! # Cap the recommendation at a single kit, pretty-printed
//! cargo run --bin nutrigap-report -- --max-kits 1 --pretty
//! ```

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use nutrigap::config::RecommenderConfig;
use nutrigap::logging::LoggingConfig;
use nutrigap::models::ConsumptionUpdate;
use nutrigap::seed::{self, seed_store};
use nutrigap::services::{IntakeService, ReportService};
use nutrigap::storage::InMemoryStore;

#[derive(Parser)]
#[command(
    name = "nutrigap-report",
    about = "Generate a personal nutrition report from seeded demo data",
    long_about = "Seeds an in-memory nutrient store with the default catalog, records a sample \
                  consumption set, and prints the combined nutrient report and supplement kit \
                  recommendations as JSON."
)]
struct ReportArgs {
    /// Maximum number of supplement kits to recommend
    #[arg(long)]
    max_kits: Option<usize>,

    /// Skip recording the sample consumption set
    #[arg(long)]
    skip_consumption: bool,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Sample consumption rows that leave visible gaps against the default
/// recommended intakes, so the demo report always has kits to suggest.
fn sample_consumption() -> Vec<ConsumptionUpdate> {
    vec![
        ConsumptionUpdate {
            nutrient_id: seed::PROTEIN_ID,
            consumed_amount: Decimal::from(30),
        },
        ConsumptionUpdate {
            nutrient_id: seed::VITAMIN_C_ID,
            consumed_amount: Decimal::from(25),
        },
        ConsumptionUpdate {
            nutrient_id: seed::WATER_ID,
            consumed_amount: Decimal::from(1500),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let store = InMemoryStore::new();
    seed_store(&store).await?;
    info!("seeded in-memory store with default nutrient catalog");

    if args.skip_consumption {
        info!("skipping sample consumption, reporting against a blank ledger");
    } else {
        let intake = IntakeService::new(store.clone());
        intake.update_consumption(sample_consumption()).await?;
    }

    let mut config = RecommenderConfig::from_env()?;
    if let Some(max_kits) = args.max_kits {
        config = config.with_max_kits(max_kits);
    }

    let reports = ReportService::with_config(store, config);
    let report = reports.personal_report().await?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");

    for item in &report.nutrients {
        let gap = item.recommended_amount - item.consumed_amount;
        info!(
            "{}: consumed {} {} of {} {} recommended (gap {})",
            item.name,
            item.consumed_amount,
            item.unit.abbreviation(),
            item.recommended_amount,
            item.unit.abbreviation(),
            gap
        );
    }
    info!(
        "recommended {} supplement kit(s)",
        report.recommended_supplements.len()
    );

    Ok(())
}
