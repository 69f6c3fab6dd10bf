//! FOOD EMISSIONS
//!
//! Weekly meat and dairy intake annualised, reduced by the share of local and
//! organic food.
//!
//! ```text
//! reduction = clamp(local/100 × 0.8 + organic/100 × 0.5, 0, 1)
//! food      = (meat × 52 × 6.6 + dairy × 52 × 1.9) × (1 − reduction)
//! ```
//!
//! The two reduction terms can sum past 1.0 (100% local and 100% organic gives
//! 1.3). The reduction is capped at 1.0 so food emissions bottom out at zero
//! instead of going negative.

use crate::input::InputModel;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// kg CO₂e per meat meal
pub const MEAT_PER_MEAL: f64 = 6.6;

/// kg CO₂e per dairy serving
pub const DAIRY_PER_SERVING: f64 = 1.9;

/// Reduction weight of a fully local diet
pub const LOCAL_WEIGHT: f64 = 0.8;

/// Reduction weight of a fully organic diet
pub const ORGANIC_WEIGHT: f64 = 0.5;

/// Combined sourcing reduction, capped to [0, 1]
pub fn sourcing_reduction(local_food: f64, organic_food: f64) -> f64 {
    let reduction = (local_food / 100.0) * LOCAL_WEIGHT + (organic_food / 100.0) * ORGANIC_WEIGHT;
    reduction.clamp(0.0, 1.0)
}

/// Unrounded annual food emissions (kg CO₂e)
pub fn calculate_food(input: &InputModel) -> f64 {
    let meat = input.meat_frequency * WEEKS_PER_YEAR * MEAT_PER_MEAL;
    let dairy = input.dairy_frequency * WEEKS_PER_YEAR * DAIRY_PER_SERVING;

    (meat + dairy) * (1.0 - sourcing_reduction(input.local_food, input.organic_food))
}
