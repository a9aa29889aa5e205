// ABOUTME: Presentation-ready summary of a footprint calculation
// ABOUTME: Chart rows with guarded percentage shares, comparison bars, and tonne display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Footprint summary
//!
//! Shapes a [`CalculationResult`] into the rows a results view renders. This
//! layer owns the zero-total guard: the calculator may return a total of 0,
//! and shares are reported as 0% rather than NaN in that case.

use ecotrace_core::constants::units::KG_PER_TONNE;
use ecotrace_core::models::{
    CalculationResult, Category, ComparisonStatus, FootprintData, Recommendation, Region,
};
use serde::Serialize;

/// One category slice of the breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    /// Breakdown category
    pub category: Category,
    /// Annual emissions, rounded to whole kg
    pub value: f64,
    /// Share of the total, rounded to whole percent
    pub share_percent: f64,
}

/// One bar of the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    /// Bar label (`You`, `<Region> Avg`, `Target`)
    pub label: String,
    /// Annual emissions (kg CO2e)
    pub value: f64,
    /// Whether this bar is the household's own total
    pub is_user: bool,
}

/// Everything a results view needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintSummary {
    /// Region the figures were computed for
    pub region: Region,
    /// Annual total (kg CO2e)
    pub total: f64,
    /// Annual total in tonnes, one decimal
    pub total_tonnes: String,
    /// Regional comparison status
    pub status: ComparisonStatus,
    /// Breakdown chart rows
    pub chart: Vec<ChartEntry>,
    /// Comparison chart bars
    pub comparison: Vec<ComparisonBar>,
    /// Recommendations from the last calculation
    pub recommendations: Vec<Recommendation>,
}

/// Percentage of `value` in `total`, 0 when the total is not positive
#[must_use]
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total * 100.0).round()
    } else {
        0.0
    }
}

/// Total formatted in tonnes with one decimal, halves rounded up
#[must_use]
pub fn format_tonnes(total_kg: f64) -> String {
    format!("{:.1}", (total_kg / KG_PER_TONNE * 10.0).round() / 10.0)
}

impl FootprintSummary {
    /// Build a summary from a computed result
    #[must_use]
    pub fn build(
        data: &FootprintData,
        result: &CalculationResult,
        recommendations: &[Recommendation],
        benchmark_target: f64,
    ) -> Self {
        let chart = result
            .breakdown
            .entries()
            .map(|(category, value)| {
                let rounded = value.round();
                ChartEntry {
                    category,
                    value: rounded,
                    share_percent: share_percent(rounded, result.total),
                }
            })
            .collect();

        let comparison = vec![
            ComparisonBar {
                label: "You".to_owned(),
                value: result.total.round(),
                is_user: true,
            },
            ComparisonBar {
                label: format!("{} Avg", data.region),
                value: result.comparison.average,
                is_user: false,
            },
            ComparisonBar {
                label: "Target".to_owned(),
                value: benchmark_target,
                is_user: false,
            },
        ];

        Self {
            region: data.region,
            total: result.total,
            total_tonnes: format_tonnes(result.total),
            status: result.comparison.status,
            chart,
            comparison,
            recommendations: recommendations.to_vec(),
        }
    }
}
