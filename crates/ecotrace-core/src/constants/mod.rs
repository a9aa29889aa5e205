// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion and display constants shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Constants module
//!
//! Emission factors are calibration data and live with the engine; this module
//! only holds conversion constants that carry no regional meaning.

/// Time-base conversions used to annualize activity quantities
pub mod units {
    /// Months per year, for monthly energy readings
    pub const MONTHS_PER_YEAR: f64 = 12.0;
    /// Weeks per year, for weekly travel quantities
    pub const WEEKS_PER_YEAR: f64 = 52.0;
    /// Kilograms per metric tonne
    pub const KG_PER_TONNE: f64 = 1000.0;
}

/// Input record field paths, matching the JSON shape of `FootprintData`
pub mod fields {
    /// Region selector
    pub const REGION: &str = "region";
    /// Monthly electricity consumption
    pub const ELECTRICITY: &str = "energy.electricity";
    /// Monthly gas consumption
    pub const GAS: &str = "energy.gas";
    /// Renewable supply flag
    pub const RENEWABLE: &str = "energy.renewable";
    /// Weekly car distance
    pub const CAR_KM: &str = "transport.carKm";
    /// Yearly flight hours
    pub const FLIGHT_HOURS: &str = "transport.flightHours";
    /// Weekly public transit hours
    pub const PUBLIC_TRANSIT_HOURS: &str = "transport.publicTransitHours";
    /// Diet pattern
    pub const DIET: &str = "diet";
    /// Recycling flag
    pub const RECYCLES: &str = "waste.recycles";
    /// Composting flag
    pub const COMPOSTS: &str = "waste.composts";
}
