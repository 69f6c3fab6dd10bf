//! Field Registry
//!
//! Names, units and kinds of every wizard field, plus the value type used to
//! merge untrusted input into an [`InputModel`](super::InputModel).

use super::{CarType, HeatingType, HomeSize};
use crate::utils::{coerce_percent, coerce_quantity, parse_quantity};
use crate::wizard::WizardStep;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a raw field update cannot be mapped onto the model
///
/// Numeric problems never show up here; those are coerced to 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("'{value}' is not a valid {field} option")]
    UnknownOption { field: &'static str, value: String },

    #[error("field '{field}' expects {expected} input, got {got}")]
    KindMismatch {
        field: &'static str,
        expected: FieldKind,
        got: &'static str,
    },
}

/// How a field's value is entered and constrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Non-negative number, unbounded above
    Quantity,
    /// Number in [0, 100]
    Percent,
    /// One of a fixed set of options
    Choice,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Quantity => f.write_str("numeric"),
            FieldKind::Percent => f.write_str("percentage"),
            FieldKind::Choice => f.write_str("option"),
        }
    }
}

/// Every field the wizard collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    CarMiles,
    CarType,
    PublicTransport,
    Flights,
    Electricity,
    Gas,
    Heating,
    HomeSize,
    MeatFrequency,
    DairyFrequency,
    LocalFood,
    OrganicFood,
    ShoppingFrequency,
    ClothingPurchases,
    ElectronicsPurchases,
    RecyclingHabits,
}

impl FieldName {
    /// All fields, in wizard order
    pub const ALL: &'static [FieldName] = &[
        FieldName::CarMiles,
        FieldName::CarType,
        FieldName::PublicTransport,
        FieldName::Flights,
        FieldName::Electricity,
        FieldName::Gas,
        FieldName::Heating,
        FieldName::HomeSize,
        FieldName::MeatFrequency,
        FieldName::DairyFrequency,
        FieldName::LocalFood,
        FieldName::OrganicFood,
        FieldName::ShoppingFrequency,
        FieldName::ClothingPurchases,
        FieldName::ElectronicsPurchases,
        FieldName::RecyclingHabits,
    ];

    /// Name used by the input surface and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::CarMiles => "carMiles",
            FieldName::CarType => "carType",
            FieldName::PublicTransport => "publicTransport",
            FieldName::Flights => "flights",
            FieldName::Electricity => "electricity",
            FieldName::Gas => "gas",
            FieldName::Heating => "heating",
            FieldName::HomeSize => "homeSize",
            FieldName::MeatFrequency => "meatFrequency",
            FieldName::DairyFrequency => "dairyFrequency",
            FieldName::LocalFood => "localFood",
            FieldName::OrganicFood => "organicFood",
            FieldName::ShoppingFrequency => "shoppingFrequency",
            FieldName::ClothingPurchases => "clothingPurchases",
            FieldName::ElectronicsPurchases => "electronicsPurchases",
            FieldName::RecyclingHabits => "recyclingHabits",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::CarMiles => "Annual car miles",
            FieldName::CarType => "Car type",
            FieldName::PublicTransport => "Public transport miles per year",
            FieldName::Flights => "Flight hours per year",
            FieldName::Electricity => "Monthly electricity use",
            FieldName::Gas => "Monthly natural gas use",
            FieldName::Heating => "Primary heating source",
            FieldName::HomeSize => "Home size",
            FieldName::MeatFrequency => "Meat meals per week",
            FieldName::DairyFrequency => "Dairy servings per week",
            FieldName::LocalFood => "Locally sourced food",
            FieldName::OrganicFood => "Organic food",
            FieldName::ShoppingFrequency => "Shopping trips per month",
            FieldName::ClothingPurchases => "Clothing items per year",
            FieldName::ElectronicsPurchases => "Electronics items per year",
            FieldName::RecyclingHabits => "Waste recycled",
        }
    }

    /// Unit shown next to the input, empty for option fields
    pub fn unit(&self) -> &'static str {
        match self {
            FieldName::CarMiles | FieldName::PublicTransport => "miles",
            FieldName::Flights => "hours",
            FieldName::Electricity => "kWh",
            FieldName::Gas => "therms",
            FieldName::MeatFrequency => "meals/week",
            FieldName::DairyFrequency => "servings/week",
            FieldName::LocalFood | FieldName::OrganicFood | FieldName::RecyclingHabits => "%",
            FieldName::ShoppingFrequency => "trips/month",
            FieldName::ClothingPurchases | FieldName::ElectronicsPurchases => "items/year",
            FieldName::CarType | FieldName::Heating | FieldName::HomeSize => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::CarType | FieldName::Heating | FieldName::HomeSize => FieldKind::Choice,
            FieldName::LocalFood | FieldName::OrganicFood | FieldName::RecyclingHabits => {
                FieldKind::Percent
            }
            _ => FieldKind::Quantity,
        }
    }

    /// Wizard step that owns this field
    pub fn step(&self) -> WizardStep {
        match self {
            FieldName::CarMiles
            | FieldName::CarType
            | FieldName::PublicTransport
            | FieldName::Flights => WizardStep::Transportation,
            FieldName::Electricity
            | FieldName::Gas
            | FieldName::Heating
            | FieldName::HomeSize => WizardStep::Energy,
            FieldName::MeatFrequency
            | FieldName::DairyFrequency
            | FieldName::LocalFood
            | FieldName::OrganicFood => WizardStep::Food,
            FieldName::ShoppingFrequency
            | FieldName::ClothingPurchases
            | FieldName::ElectronicsPurchases
            | FieldName::RecyclingHabits => WizardStep::Consumption,
        }
    }

    /// Option tags accepted by a choice field, empty for numeric fields
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            FieldName::CarType => CarType::ALL.iter().map(|v| v.tag()).collect(),
            FieldName::Heating => HeatingType::ALL.iter().map(|v| v.tag()).collect(),
            FieldName::HomeSize => HomeSize::ALL.iter().map(|v| v.tag()).collect(),
            _ => Vec::new(),
        }
    }

    /// Apply this field's numeric constraint
    pub fn coerce_number(&self, value: f64) -> f64 {
        match self.kind() {
            FieldKind::Percent => coerce_percent(value),
            _ => coerce_quantity(value),
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value destined for one field
///
/// `Text` is the raw form delivered by input events and is resolved against the
/// target field's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Car(CarType),
    Heating(HeatingType),
    Home(HomeSize),
}

impl FieldValue {
    pub(crate) fn kind_label(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
            FieldValue::Car(_) => "car type",
            FieldValue::Heating(_) => "heating type",
            FieldValue::Home(_) => "home size",
        }
    }

    /// Map a raw JSON value onto a field value
    ///
    /// `null` becomes empty text, which numeric fields read as 0. Numeric
    /// strings stay text and are parsed against the target field.
    pub fn from_json(value: &Value) -> FieldValue {
        match value {
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Null => FieldValue::Text(String::new()),
            other => FieldValue::Text(other.to_string()),
        }
    }

    /// Resolve this value for `field`, coercing numbers and parsing option tags
    pub fn coerce_for(self, field: FieldName) -> Result<FieldValue, FieldError> {
        let mismatch = |got: &'static str| FieldError::KindMismatch {
            field: field.as_str(),
            expected: field.kind(),
            got,
        };

        match (field.kind(), self) {
            (FieldKind::Quantity | FieldKind::Percent, FieldValue::Number(n)) => {
                Ok(FieldValue::Number(field.coerce_number(n)))
            }
            (FieldKind::Quantity | FieldKind::Percent, FieldValue::Text(raw)) => {
                Ok(FieldValue::Number(field.coerce_number(parse_quantity(&raw))))
            }
            (FieldKind::Choice, FieldValue::Text(raw)) => match field {
                FieldName::CarType => Ok(FieldValue::Car(raw.parse()?)),
                FieldName::Heating => Ok(FieldValue::Heating(raw.parse()?)),
                FieldName::HomeSize => Ok(FieldValue::Home(raw.parse()?)),
                _ => Err(mismatch("text")),
            },
            (FieldKind::Choice, value @ FieldValue::Car(_)) if field == FieldName::CarType => {
                Ok(value)
            }
            (FieldKind::Choice, value @ FieldValue::Heating(_)) if field == FieldName::Heating => {
                Ok(value)
            }
            (FieldKind::Choice, value @ FieldValue::Home(_)) if field == FieldName::HomeSize => {
                Ok(value)
            }
            (_, other) => Err(mismatch(other.kind_label())),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<CarType> for FieldValue {
    fn from(v: CarType) -> Self {
        FieldValue::Car(v)
    }
}

impl From<HeatingType> for FieldValue {
    fn from(v: HeatingType) -> Self {
        FieldValue::Heating(v)
    }
}

impl From<HomeSize> for FieldValue {
    fn from(v: HomeSize) -> Self {
        FieldValue::Home(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for &field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
        assert_eq!(
            "carmiles".parse::<FieldName>(),
            Err(FieldError::UnknownField("carmiles".to_string()))
        );
    }

    #[test]
    fn test_four_fields_per_step() {
        for step in WizardStep::ALL {
            let count = FieldName::ALL.iter().filter(|f| f.step() == *step).count();
            assert_eq!(count, 4, "step {:?}", step);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FieldName::RecyclingHabits.kind(), FieldKind::Percent);
        assert_eq!(FieldName::HomeSize.kind(), FieldKind::Choice);
        assert_eq!(FieldName::Electricity.kind(), FieldKind::Quantity);
        assert_eq!(FieldName::Heating.options(), vec!["gas", "electric", "oil", "renewable"]);
        assert!(FieldName::Gas.options().is_empty());
    }

    #[test]
    fn test_units() {
        assert_eq!(FieldName::Electricity.unit(), "kWh");
        assert_eq!(FieldName::Flights.unit(), "hours");
        assert_eq!(FieldName::LocalFood.unit(), "%");
        assert_eq!(FieldName::CarType.unit(), "");
        for field in FieldName::ALL {
            assert_eq!(field.unit().is_empty(), field.kind() == FieldKind::Choice, "{}", field);
        }
    }

    #[test]
    fn test_coerce_for() {
        assert_eq!(
            FieldValue::from("  42 ").coerce_for(FieldName::Flights).unwrap(),
            FieldValue::Number(42.0)
        );
        assert_eq!(
            FieldValue::from(180.0).coerce_for(FieldName::OrganicFood).unwrap(),
            FieldValue::Number(100.0)
        );
        assert_eq!(
            FieldValue::from("hybrid").coerce_for(FieldName::CarType).unwrap(),
            FieldValue::Car(CarType::Hybrid)
        );
        assert!(matches!(
            FieldValue::from("moped").coerce_for(FieldName::CarType),
            Err(FieldError::UnknownOption { .. })
        ));
        assert!(matches!(
            FieldValue::from(HomeSize::Small).coerce_for(FieldName::Heating),
            Err(FieldError::KindMismatch { got: "home size", .. })
        ));
    }

    #[test]
    fn test_from_json() {
        use serde_json::json;

        assert_eq!(FieldValue::from_json(&json!(12000)), FieldValue::Number(12000.0));
        assert_eq!(FieldValue::from_json(&json!("2")), FieldValue::Text("2".into()));
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Text(String::new()));

        let coerced = |v| FieldValue::from_json(&v).coerce_for(FieldName::CarMiles).unwrap();
        assert_eq!(coerced(json!(null)), FieldValue::Number(0.0));
        assert_eq!(coerced(json!("")), FieldValue::Number(0.0));
        assert_eq!(coerced(json!("12000")), FieldValue::Number(12000.0));
        assert_eq!(coerced(json!(true)), FieldValue::Number(0.0));
        assert_eq!(coerced(json!([1, 2])), FieldValue::Number(0.0));
    }

    #[test]
    fn test_error_messages() {
        let err = FieldError::UnknownOption { field: "CarType", value: "moped".into() };
        assert_eq!(err.to_string(), "'moped' is not a valid CarType option");
        let err = FieldError::KindMismatch {
            field: "carType",
            expected: FieldKind::Choice,
            got: "number",
        };
        assert_eq!(err.to_string(), "field 'carType' expects option input, got number");
    }
}
