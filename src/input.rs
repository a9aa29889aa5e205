// ABOUTME: Input-record loading at the application boundary
// ABOUTME: Parses and validates FootprintData from JSON text or files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Input loading
//!
//! Out-of-enum region or diet strings fail during deserialization; numeric
//! fields are checked by [`FootprintData::validate`] before a record is
//! handed to the engine.

use std::fs;
use std::path::Path;

use ecotrace_core::models::{FieldUpdate, FootprintData};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Parse and validate a record from JSON text
///
/// # Errors
///
/// Returns `AppError::Json` for malformed JSON or unknown enum values and
/// `AppError::Validation` for negative or non-finite quantities
pub fn parse_footprint(json: &str) -> AppResult<FootprintData> {
    let data: FootprintData = serde_json::from_str(json)?;
    data.validate()?;
    Ok(data)
}

/// Load and validate a record from a JSON file
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be read, otherwise as [`parse_footprint`]
pub fn load_footprint(path: &Path) -> AppResult<FootprintData> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path.display().to_string(), e))?;
    let data = parse_footprint(&text)?;
    debug!(path = %path.display(), region = %data.region, "Loaded footprint input");
    Ok(data)
}

/// Apply a sequence of field updates, stopping at the first rejection
///
/// # Errors
///
/// Returns `AppError::Validation` naming the first rejected field
pub fn apply_updates(
    mut data: FootprintData,
    updates: impl IntoIterator<Item = FieldUpdate>,
) -> AppResult<FootprintData> {
    for update in updates {
        data.apply(update)?;
    }
    Ok(data)
}
