// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and reusable household fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ecotrace`

use ecotrace::models::{DietPattern, FieldUpdate, FootprintData, Region};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Apply a list of updates to the default household
pub fn household(updates: &[FieldUpdate]) -> FootprintData {
    updates
        .iter()
        .try_fold(FootprintData::default(), |data, update| data.with(*update))
        .unwrap()
}

/// Meat-heavy, car-dependent, non-composting household in a region
pub fn heavy_household(region: Region) -> FootprintData {
    household(&[
        FieldUpdate::Region(region),
        FieldUpdate::CarKm(400.0),
        FieldUpdate::Diet(DietPattern::MeatHeavy),
        FieldUpdate::Composts(false),
    ])
}

/// Float comparison with a fixed tolerance
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
