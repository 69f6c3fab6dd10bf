//! Input Model
//!
//! Typed record of every wizard field. Enum-valued fields are closed types so
//! that the emission factors are matched exhaustively instead of looked up.

pub mod fields;

pub use fields::{FieldError, FieldKind, FieldName, FieldValue};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle powertrain for the primary car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    #[default]
    Gas,
    Hybrid,
    Electric,
}

/// Primary home heating source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatingType {
    #[default]
    Gas,
    Electric,
    Oil,
    Renewable,
}

/// Home size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Implements option-tag parsing and display for the closed enum fields
macro_rules! option_tags {
    ($ty:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            /// All selectable options, in display order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Lowercase tag used by the input surface and in JSON
            pub fn tag(&self) -> &'static str {
                match self {
                    $($ty::$variant => $tag),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($tag => Ok($ty::$variant),)+
                    other => Err(FieldError::UnknownOption {
                        field: stringify!($ty),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

option_tags!(CarType { Gas => "gas", Hybrid => "hybrid", Electric => "electric" });
option_tags!(HeatingType {
    Gas => "gas",
    Electric => "electric",
    Oil => "oil",
    Renewable => "renewable",
});
option_tags!(HomeSize { Small => "small", Medium => "medium", Large => "large" });

/// All lifestyle inputs collected by the wizard
///
/// Units are fixed: miles, hours, kWh and therms per month, counts per
/// week/month/year, and percentages in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputModel {
    // Transportation
    pub car_miles: f64,           // miles/year
    pub car_type: CarType,
    pub public_transport: f64,    // miles/year
    pub flights: f64,             // hours/year

    // Energy
    pub electricity: f64,         // kWh/month
    pub gas: f64,                 // therms/month
    pub heating: HeatingType,
    pub home_size: HomeSize,

    // Food
    pub meat_frequency: f64,      // meals/week
    pub dairy_frequency: f64,     // servings/week
    pub local_food: f64,          // percent
    pub organic_food: f64,        // percent

    // Consumption
    pub shopping_frequency: f64,  // trips/month
    pub clothing_purchases: f64,  // items/year
    pub electronics_purchases: f64, // items/year
    pub recycling_habits: f64,    // percent
}

impl Default for InputModel {
    fn default() -> Self {
        Self {
            car_miles: 0.0,
            car_type: CarType::default(),
            public_transport: 0.0,
            flights: 0.0,
            electricity: 0.0,
            gas: 0.0,
            heating: HeatingType::default(),
            home_size: HomeSize::default(),
            meat_frequency: 0.0,
            dairy_frequency: 0.0,
            local_food: 0.0,
            organic_food: 0.0,
            shopping_frequency: 0.0,
            clothing_purchases: 0.0,
            electronics_purchases: 0.0,
            recycling_habits: 0.0,
        }
    }
}

impl InputModel {
    /// Read the current value of a field
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::CarMiles => FieldValue::Number(self.car_miles),
            FieldName::CarType => FieldValue::Car(self.car_type),
            FieldName::PublicTransport => FieldValue::Number(self.public_transport),
            FieldName::Flights => FieldValue::Number(self.flights),
            FieldName::Electricity => FieldValue::Number(self.electricity),
            FieldName::Gas => FieldValue::Number(self.gas),
            FieldName::Heating => FieldValue::Heating(self.heating),
            FieldName::HomeSize => FieldValue::Home(self.home_size),
            FieldName::MeatFrequency => FieldValue::Number(self.meat_frequency),
            FieldName::DairyFrequency => FieldValue::Number(self.dairy_frequency),
            FieldName::LocalFood => FieldValue::Number(self.local_food),
            FieldName::OrganicFood => FieldValue::Number(self.organic_food),
            FieldName::ShoppingFrequency => FieldValue::Number(self.shopping_frequency),
            FieldName::ClothingPurchases => FieldValue::Number(self.clothing_purchases),
            FieldName::ElectronicsPurchases => FieldValue::Number(self.electronics_purchases),
            FieldName::RecyclingHabits => FieldValue::Number(self.recycling_habits),
        }
    }

    /// Merge a single field value, coercing numbers at the boundary
    ///
    /// Returns an error only when the value's kind does not match the field
    /// (e.g. a heating option given for `carType`).
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldError> {
        let value = value.coerce_for(field)?;
        match (field, value) {
            (FieldName::CarType, FieldValue::Car(v)) => self.car_type = v,
            (FieldName::Heating, FieldValue::Heating(v)) => self.heating = v,
            (FieldName::HomeSize, FieldValue::Home(v)) => self.home_size = v,
            (field, FieldValue::Number(n)) => *self.number_slot(field)? = n,
            (field, other) => {
                return Err(FieldError::KindMismatch {
                    field: field.as_str(),
                    expected: field.kind(),
                    got: other.kind_label(),
                })
            }
        }
        Ok(())
    }

    /// Re-apply boundary coercion to every numeric field
    ///
    /// Used when a whole model arrives from outside the wizard (e.g. JSON).
    pub fn sanitized(mut self) -> Self {
        for &field in FieldName::ALL {
            if let FieldValue::Number(n) = self.get(field) {
                if let Ok(slot) = self.number_slot(field) {
                    *slot = field.coerce_number(n);
                }
            }
        }
        self
    }

    fn number_slot(&mut self, field: FieldName) -> Result<&mut f64, FieldError> {
        let slot = match field {
            FieldName::CarMiles => &mut self.car_miles,
            FieldName::PublicTransport => &mut self.public_transport,
            FieldName::Flights => &mut self.flights,
            FieldName::Electricity => &mut self.electricity,
            FieldName::Gas => &mut self.gas,
            FieldName::MeatFrequency => &mut self.meat_frequency,
            FieldName::DairyFrequency => &mut self.dairy_frequency,
            FieldName::LocalFood => &mut self.local_food,
            FieldName::OrganicFood => &mut self.organic_food,
            FieldName::ShoppingFrequency => &mut self.shopping_frequency,
            FieldName::ClothingPurchases => &mut self.clothing_purchases,
            FieldName::ElectronicsPurchases => &mut self.electronics_purchases,
            FieldName::RecyclingHabits => &mut self.recycling_habits,
            FieldName::CarType | FieldName::Heating | FieldName::HomeSize => {
                return Err(FieldError::KindMismatch {
                    field: field.as_str(),
                    expected: field.kind(),
                    got: "number",
                })
            }
        };
        Ok(slot)
    }
}
