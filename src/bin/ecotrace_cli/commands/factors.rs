// ABOUTME: Factors command for ecotrace-cli
// ABOUTME: Prints the regional emission factor table as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use std::collections::BTreeMap;

use ecotrace::errors::AppResult;
use ecotrace::factors_for;
use ecotrace::formatters::{render_factors, to_json, OutputFormat};
use ecotrace::models::Region;

/// Print factors for one region, or all regions
pub fn run(region: Option<Region>, format: OutputFormat) -> AppResult<()> {
    let regions: Vec<Region> = region.map_or_else(|| Region::ALL.to_vec(), |r| vec![r]);

    match format {
        OutputFormat::Json => {
            let table: BTreeMap<&str, _> = regions
                .iter()
                .map(|r| (r.as_str(), factors_for(*r)))
                .collect();
            println!("{}", to_json(&table)?);
        }
        OutputFormat::Text => {
            for r in regions {
                println!("{}", render_factors(r.as_str(), factors_for(r)));
            }
        }
    }
    Ok(())
}
