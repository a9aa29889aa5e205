// ABOUTME: Template command for ecotrace-cli
// ABOUTME: Prints the built-in default household record as editable JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

use ecotrace::errors::AppResult;
use ecotrace::formatters::to_json;
use ecotrace::models::FootprintData;

/// Print the default input record
pub fn run() -> AppResult<()> {
    println!("{}", to_json(&FootprintData::default())?);
    Ok(())
}
