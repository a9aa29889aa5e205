// ABOUTME: Estimate command for ecotrace-cli
// ABOUTME: Builds an input record from a file and flag overrides, then prints the summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use std::path::PathBuf;

use clap::Args;
use ecotrace::errors::AppResult;
use ecotrace::formatters::{format_summary, OutputFormat};
use ecotrace::input::{apply_updates, load_footprint};
use ecotrace::models::{DietPattern, FieldUpdate, FootprintData, Region};
use ecotrace::session::FootprintSession;
use ecotrace::summary::FootprintSummary;
use ecotrace::EngineConfig;
use tracing::info;

/// Arguments for `ecotrace-cli estimate`
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// JSON input record (defaults to the built-in household)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Region (global, india)
    #[arg(long)]
    region: Option<Region>,

    /// Electricity consumption (kWh/month)
    #[arg(long, allow_negative_numbers = true)]
    electricity: Option<f64>,

    /// Natural gas consumption (kWh/month)
    #[arg(long, allow_negative_numbers = true)]
    gas: Option<f64>,

    /// Renewable energy supply (true, false)
    #[arg(long)]
    renewable: Option<bool>,

    /// Car distance (km/week)
    #[arg(long, allow_negative_numbers = true)]
    car_km: Option<f64>,

    /// Air travel (hours/year)
    #[arg(long, allow_negative_numbers = true)]
    flight_hours: Option<f64>,

    /// Public transit usage (hours/week)
    #[arg(long, allow_negative_numbers = true)]
    transit_hours: Option<f64>,

    /// Diet pattern (meat-heavy, balanced, vegetarian, vegan)
    #[arg(long)]
    diet: Option<DietPattern>,

    /// Household recycles (true, false)
    #[arg(long)]
    recycles: Option<bool>,

    /// Household composts (true, false)
    #[arg(long)]
    composts: Option<bool>,

    /// Output format (text, json)
    #[arg(long, short = 'f', default_value = "text")]
    format: OutputFormat,
}

impl EstimateArgs {
    /// Flag overrides as typed field updates, in record field order
    fn updates(&self) -> Vec<FieldUpdate> {
        [
            self.region.map(FieldUpdate::Region),
            self.electricity.map(FieldUpdate::Electricity),
            self.gas.map(FieldUpdate::Gas),
            self.renewable.map(FieldUpdate::Renewable),
            self.car_km.map(FieldUpdate::CarKm),
            self.flight_hours.map(FieldUpdate::FlightHours),
            self.transit_hours.map(FieldUpdate::PublicTransitHours),
            self.diet.map(FieldUpdate::Diet),
            self.recycles.map(FieldUpdate::Recycles),
            self.composts.map(FieldUpdate::Composts),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Compute and print a footprint
pub fn run(args: &EstimateArgs) -> AppResult<()> {
    let config = EngineConfig::load()?;

    let base = match &args.input {
        Some(path) => load_footprint(path)?,
        None => FootprintData::default(),
    };
    let data = apply_updates(base, args.updates())?;

    let mut session = FootprintSession::with_config(data, &config);
    let result = session.result();
    let recommendations = session.calculate().to_vec();
    info!(region = %data.region, total = result.total, "Estimate complete");

    let summary = FootprintSummary::build(
        &data,
        &result,
        &recommendations,
        config.comparison.benchmark_target,
    );
    println!("{}", format_summary(&summary, args.format)?);
    Ok(())
}
