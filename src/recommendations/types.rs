use crate::metrics::Category;
use serde::{Deserialize, Serialize};

/// Fixed severity label assigned per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Actionable suggestion for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub suggestion: String,
    pub impact_estimate: String,
    pub priority: Priority,
}

/// Trigger rule for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRule {
    pub category: Category,
    /// Fraction of the global average the category must exceed
    pub threshold_fraction: f64,
    pub priority: Priority,
    pub suggestion: &'static str,
    pub impact_estimate: &'static str,
}

impl RecommendationRule {
    /// Threshold in kg CO₂e/year
    pub fn threshold(&self) -> f64 {
        self.threshold_fraction * crate::benchmark::GLOBAL_AVERAGE
    }

    /// Strictly-greater comparison against the rounded category value
    pub fn is_triggered(&self, value: i64) -> bool {
        value as f64 > self.threshold()
    }

    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            category: self.category,
            suggestion: self.suggestion.to_string(),
            impact_estimate: self.impact_estimate.to_string(),
            priority: self.priority,
        }
    }
}
