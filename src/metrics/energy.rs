//! HOME ENERGY EMISSIONS
//!
//! Monthly electricity and gas use, scaled by heating source and home size.
//!
//! ```text
//! energy = (electricity × 0.92 + gas × 5.3) × heating_factor × size_factor
//! ```

use crate::input::{HeatingType, HomeSize, InputModel};

/// kg CO₂e per kWh of electricity
pub const ELECTRICITY_PER_KWH: f64 = 0.92;

/// kg CO₂e per therm of natural gas
pub const GAS_PER_THERM: f64 = 5.3;

pub fn heating_factor(heating: HeatingType) -> f64 {
    match heating {
        HeatingType::Gas => 1.2,
        HeatingType::Electric => 1.0,
        HeatingType::Oil => 1.5,
        HeatingType::Renewable => 0.3,
    }
}

pub fn size_factor(home_size: HomeSize) -> f64 {
    match home_size {
        HomeSize::Small => 0.8,
        HomeSize::Medium => 1.0,
        HomeSize::Large => 1.3,
    }
}

/// Unrounded annual energy emissions (kg CO₂e)
pub fn calculate_energy(input: &InputModel) -> f64 {
    (input.electricity * ELECTRICITY_PER_KWH + input.gas * GAS_PER_THERM)
        * heating_factor(input.heating)
        * size_factor(input.home_size)
}
