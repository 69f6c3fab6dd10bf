//! Emission calculators for the four lifestyle categories
//!
//! Each category is implemented in its own module as a pure function of the
//! input model. This module combines them into a [`FootprintResult`].

pub mod transportation;
pub mod energy;
pub mod food;
pub mod consumption;

pub use transportation::calculate_transportation;
pub use energy::calculate_energy;
pub use food::calculate_food;
pub use consumption::calculate_consumption;

use crate::input::InputModel;
use crate::utils::round_kg;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifestyle category; also the order of wizard steps and recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Energy,
    Food,
    Consumption,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Energy,
        Category::Food,
        Category::Consumption,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Consumption => "consumption",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Energy => "Home Energy",
            Category::Food => "Food & Diet",
            Category::Consumption => "Consumption",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrounded per-category emissions (kg CO₂e/year)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategoryEmissions {
    pub transportation: f64,
    pub energy: f64,
    pub food: f64,
    pub consumption: f64,
}

impl RawCategoryEmissions {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Energy => self.energy,
            Category::Food => self.food,
            Category::Consumption => self.consumption,
        }
    }

    pub fn sum(&self) -> f64 {
        self.transportation + self.energy + self.food + self.consumption
    }
}

/// Per-category emissions rounded for display (kg CO₂e/year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResults {
    pub transportation: i64,
    pub energy: i64,
    pub food: i64,
    pub consumption: i64,
}

impl CategoryResults {
    pub fn get(&self, category: Category) -> i64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Energy => self.energy,
            Category::Food => self.food,
            Category::Consumption => self.consumption,
        }
    }

    /// (category, value) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, i64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Output of one footprint calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub raw: RawCategoryEmissions,
    pub categories: CategoryResults,
    /// Rounded sum of the unrounded category values
    pub total: i64,
}

/// Calculate annual emissions for every category plus the total
///
/// The total rounds the sum of the unrounded values, so it can differ by one
/// or two from the sum of the rounded categories.
pub fn calculate_footprint(input: &InputModel) -> FootprintResult {
    let raw = RawCategoryEmissions {
        transportation: calculate_transportation(input),
        energy: calculate_energy(input),
        food: calculate_food(input),
        consumption: calculate_consumption(input),
    };

    let categories = CategoryResults {
        transportation: round_kg(raw.transportation),
        energy: round_kg(raw.energy),
        food: round_kg(raw.food),
        consumption: round_kg(raw.consumption),
    };

    FootprintResult {
        raw,
        categories,
        total: round_kg(raw.sum()),
    }
}
