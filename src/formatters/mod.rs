// ABOUTME: Output format abstraction for rendering footprint summaries
// ABOUTME: Supports a human-readable text report and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default, a terminal report with bars and recommendations
//! - **JSON**: Pretty-printed serialization of the same data

use std::fmt::{self, Write as _};
use std::str::FromStr;

use ecotrace_core::models::EmissionFactors;
use serde::Serialize;

use crate::errors::AppResult;
use crate::summary::FootprintSummary;

/// Width of a full-scale bar in the text report
const BAR_WIDTH: usize = 30;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_summary(summary: &FootprintSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "#".repeat(filled.min(BAR_WIDTH))
}

/// Text report of a summary
#[must_use]
pub fn render_text(summary: &FootprintSummary) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Annual CO2e ({})", summary.region);
    let _ = writeln!(
        out,
        "  {} tonnes  [{}]",
        summary.total_tonnes, summary.status
    );
    out.push('\n');

    let _ = writeln!(out, "Emissions Breakdown");
    for entry in &summary.chart {
        let _ = writeln!(
            out,
            "  {:<10} {:>7} kg {:>4}%  {}",
            entry.category.as_str(),
            entry.value,
            entry.share_percent,
            bar(entry.share_percent, 100.0)
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Localized Comparison");
    let max = summary
        .comparison
        .iter()
        .map(|b| b.value)
        .fold(0.0_f64, f64::max);
    for entry in &summary.comparison {
        let _ = writeln!(
            out,
            "  {:<13} {:>7} kg  {}",
            entry.label,
            entry.value,
            bar(entry.value, max)
        );
    }

    if !summary.recommendations.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Recommended Sustainability Actions");
        for (idx, rec) in summary.recommendations.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} [{} Impact, {}]",
                idx + 1,
                rec.title,
                rec.impact,
                rec.category
            );
            let _ = writeln!(out, "     {}", rec.description);
        }
    }

    out
}

/// Text table of one region's emission factors
#[must_use]
pub fn render_factors(region: &str, factors: &EmissionFactors) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Emission factors ({region})");
    let _ = writeln!(out, "  electricity   {:>8} kg/kWh", factors.electricity);
    let _ = writeln!(out, "  gas           {:>8} kg/kWh", factors.gas);
    let _ = writeln!(out, "  car           {:>8} kg/km", factors.car);
    let _ = writeln!(out, "  flight        {:>8} kg/h", factors.flight);
    let _ = writeln!(out, "  transit       {:>8}", factors.transit);
    let _ = writeln!(out, "  diet meat-heavy {:>6} kg/yr", factors.diet.meat_heavy);
    let _ = writeln!(out, "  diet balanced   {:>6} kg/yr", factors.diet.balanced);
    let _ = writeln!(out, "  diet vegetarian {:>6} kg/yr", factors.diet.vegetarian);
    let _ = writeln!(out, "  diet vegan      {:>6} kg/yr", factors.diet.vegan);
    let _ = writeln!(out, "  avg per capita {:>7} kg/yr", factors.avg_per_capita);
    out
}
