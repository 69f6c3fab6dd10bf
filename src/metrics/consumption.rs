//! CONSUMPTION EMISSIONS
//!
//! Shopping trips, clothing and electronics purchases, reduced by recycling.
//!
//! ```text
//! consumption = (shopping × 12 × 45 + clothing × 33 + electronics × 300)
//!               × (1 − recycling/100 × 0.6)
//! ```

use crate::input::InputModel;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// kg CO₂e per shopping trip
pub const SHOPPING_PER_TRIP: f64 = 45.0;

/// kg CO₂e per clothing item
pub const CLOTHING_PER_ITEM: f64 = 33.0;

/// kg CO₂e per electronics item
pub const ELECTRONICS_PER_ITEM: f64 = 300.0;

/// Reduction reached when everything is recycled
pub const RECYCLING_WEIGHT: f64 = 0.6;

/// Unrounded annual consumption emissions (kg CO₂e)
pub fn calculate_consumption(input: &InputModel) -> f64 {
    let shopping = input.shopping_frequency * MONTHS_PER_YEAR * SHOPPING_PER_TRIP;
    let clothing = input.clothing_purchases * CLOTHING_PER_ITEM;
    let electronics = input.electronics_purchases * ELECTRONICS_PER_ITEM;
    let recycling_reduction = (input.recycling_habits / 100.0) * RECYCLING_WEIGHT;

    (shopping + clothing + electronics) * (1.0 - recycling_reduction)
}
