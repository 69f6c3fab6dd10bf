//! Recommendation engine
//!
//! Derives at most one suggestion per category from the rounded category
//! results, always in category order.

pub mod types;
pub mod generator;

pub use types::{Priority, Recommendation, RecommendationRule};
pub use generator::{generate_recommendations, rule_for, RULES};
