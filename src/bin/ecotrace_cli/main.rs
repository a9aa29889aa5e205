// ABOUTME: EcoTrace CLI - estimate a household carbon footprint from the command line
// ABOUTME: Computes footprints, prints factor tables, and emits input templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors
//!
//! Usage:
//! ```bash
//! # Estimate the built-in default household
//! ecotrace-cli estimate
//!
//! # Estimate from a JSON record, overriding a few fields
//! ecotrace-cli estimate --input household.json --region global --car-km 200
//!
//! # Machine-readable output
//! ecotrace-cli estimate --diet meat-heavy --format json
//!
//! # Show emission factors for India
//! ecotrace-cli factors --region india
//!
//! # Print a starting JSON record
//! ecotrace-cli template > household.json
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ecotrace::errors::{AppError, AppResult};
use ecotrace::formatters::OutputFormat;
use ecotrace::logging::LoggingConfig;
use ecotrace::models::Region;
use tracing::debug;

use commands::estimate::EstimateArgs;

#[derive(Parser)]
#[command(
    name = "ecotrace-cli",
    about = "EcoTrace household carbon footprint estimator",
    long_about = "Estimate annual CO2e emissions from home energy, transport, diet and waste habits, \
                  compare against the regional average, and get reduction recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a footprint and recommendations
    Estimate(EstimateArgs),

    /// Show the emission factor table
    Factors {
        /// Only show this region
        #[arg(long)]
        region: Option<Region>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the default input record as JSON
    Template,
}

fn init_logging(verbose: bool) -> AppResult<()> {
    let mut config = LoggingConfig::from_env();
    if verbose {
        config = config.with_level("debug");
    }
    config
        .init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run(cli: Cli) -> AppResult<()> {
    init_logging(cli.verbose)?;
    debug!("EcoTrace CLI");

    match cli.command {
        Command::Estimate(args) => commands::estimate::run(&args),
        Command::Factors { region, format } => commands::factors::run(region, format),
        Command::Template => commands::template::run(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.code().exit_status())
        }
    }
}
