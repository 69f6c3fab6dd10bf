//! Utility modules shared across the engine
//!
//! - Coercion: boundary conversion of raw field input and rounding

pub mod coercion;

pub use coercion::{coerce_percent, coerce_quantity, parse_quantity, round_kg, PERCENT_MAX, QUANTITY_MAX};
