use crate::metrics::{Category, CategoryResults};
use crate::recommendations::types::{Priority, Recommendation, RecommendationRule};

/// Rules in category order
pub const RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        category: Category::Transportation,
        threshold_fraction: 0.30,
        priority: Priority::High,
        suggestion: "Consider carpooling, public transit, or switching to a hybrid or electric vehicle. Replacing one flight a year with a train trip also helps.",
        impact_estimate: "Could save 1,000-2,000 kg CO₂e per year",
    },
    RecommendationRule {
        category: Category::Energy,
        threshold_fraction: 0.25,
        priority: Priority::Medium,
        suggestion: "Switch to a renewable energy plan, improve insulation, and use a smart thermostat to cut heating demand.",
        impact_estimate: "Could save 800-1,500 kg CO₂e per year",
    },
    RecommendationRule {
        category: Category::Food,
        threshold_fraction: 0.20,
        priority: Priority::Medium,
        suggestion: "Try a few plant-based days each week and buy more local, seasonal produce.",
        impact_estimate: "Could save 500-1,000 kg CO₂e per year",
    },
    RecommendationRule {
        category: Category::Consumption,
        threshold_fraction: 0.15,
        priority: Priority::Low,
        suggestion: "Buy fewer, longer-lasting items, choose second-hand where possible, and recycle consistently.",
        impact_estimate: "Could save 200-600 kg CO₂e per year",
    },
];

pub fn rule_for(category: Category) -> &'static RecommendationRule {
    match category {
        Category::Transportation => &RULES[0],
        Category::Energy => &RULES[1],
        Category::Food => &RULES[2],
        Category::Consumption => &RULES[3],
    }
}

/// Generate recommendations for every category above its threshold
///
/// Order follows [`Category::ALL`], not the size of the excess.
pub fn generate_recommendations(results: &CategoryResults) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| rule.is_triggered(results.get(rule.category)))
        .map(RecommendationRule::to_recommendation)
        .collect()
}
