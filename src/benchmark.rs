//! Benchmark Comparator
//!
//! Compares a footprint total against the global per-capita average and the
//! per-capita budget compatible with a 2°C pathway.

use crate::metrics::{Category, FootprintResult};
use serde::{Deserialize, Serialize};

/// Global average footprint (kg CO₂e/year)
pub const GLOBAL_AVERAGE: f64 = 4800.0;

/// Per-capita footprint compatible with the 2°C target (kg CO₂e/year)
pub const TARGET_2C: f64 = 2300.0;

/// Totals above this are high impact
pub const HIGH_IMPACT_ABOVE: i64 = 6000;

/// Totals above this (and not high) are medium impact
pub const MEDIUM_IMPACT_ABOVE: i64 = 3500;

/// Presentation tone for a footprint total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    /// Derive impact level from a rounded total
    pub fn from_total(total: i64) -> Self {
        match total {
            t if t > HIGH_IMPACT_ABOVE => ImpactLevel::High,
            t if t > MEDIUM_IMPACT_ABOVE => ImpactLevel::Medium,
            _ => ImpactLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "Your footprint is below average. Keep it up!",
            ImpactLevel::Medium => "Your footprint is moderate, with clear room to improve.",
            ImpactLevel::High => "Your footprint is high. Small changes can make a big difference.",
        }
    }
}

/// Comparison of a total against the reference footprints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Percent above (positive) or below (negative) the global average
    pub pct_vs_global: f64,
    /// Percent above (positive) or below (negative) the 2°C target
    pub pct_vs_target: f64,
    pub impact_level: ImpactLevel,
}

/// Compare a rounded total against the reference constants
pub fn compare(total: i64) -> Comparison {
    let total_f = total as f64;
    Comparison {
        pct_vs_global: (total_f - GLOBAL_AVERAGE) / GLOBAL_AVERAGE * 100.0,
        pct_vs_target: (total_f - TARGET_2C) / TARGET_2C * 100.0,
        impact_level: ImpactLevel::from_total(total),
    }
}

/// One category's share of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub value: i64,
    /// Share of the total in percent (0 when the total is 0)
    pub percent: f64,
}

/// Per-category shares for charting, in category order
pub fn category_breakdown(result: &FootprintResult) -> Vec<CategoryShare> {
    let total = result.total as f64;
    result
        .categories
        .iter()
        .map(|(category, value)| CategoryShare {
            category,
            value,
            percent: if total > 0.0 { value as f64 / total * 100.0 } else { 0.0 },
        })
        .collect()
}
