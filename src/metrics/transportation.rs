//! TRANSPORTATION EMISSIONS
//!
//! Car travel by powertrain, public transport miles and flight hours.
//!
//! ```text
//! transportation = car_miles × car_factor + public_transport × 0.089 + flights × 1100
//! ```

use crate::input::{CarType, InputModel};

/// kg CO₂e per public transport mile
pub const PUBLIC_TRANSPORT_PER_MILE: f64 = 0.089;

/// kg CO₂e per flight hour
pub const FLIGHT_PER_HOUR: f64 = 1100.0;

/// kg CO₂e per car mile for each powertrain
pub fn car_factor(car_type: CarType) -> f64 {
    match car_type {
        CarType::Gas => 0.411,
        CarType::Hybrid => 0.205,
        CarType::Electric => 0.1,
    }
}

/// Unrounded annual transportation emissions (kg CO₂e)
pub fn calculate_transportation(input: &InputModel) -> f64 {
    input.car_miles * car_factor(input.car_type)
        + input.public_transport * PUBLIC_TRANSPORT_PER_MILE
        + input.flights * FLIGHT_PER_HOUR
}
