//! Input Coercion
//!
//! Boundary conversion of untrusted field input into model values.
//! Nothing past this point ever sees NaN, infinities or negative quantities.

/// Upper bound for percentage fields (local food, organic food, recycling)
pub const PERCENT_MAX: f64 = 100.0;

/// Upper bound for every other numeric field
///
/// At this cap the largest category (flights × 1100) stays near 1.1e12 kg, so
/// rounded results and their sums fit comfortably in an `i64`.
pub const QUANTITY_MAX: f64 = 1e9;

/// Coerce an already-numeric value into [0, QUANTITY_MAX]
///
/// NaN, infinities and negatives all collapse to 0.
#[inline]
pub fn coerce_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(QUANTITY_MAX)
    } else {
        0.0
    }
}

/// Coerce a percentage into [0, 100]
#[inline]
pub fn coerce_percent(value: f64) -> f64 {
    coerce_quantity(value).min(PERCENT_MAX)
}

/// Parse raw text from an input field
///
/// Surrounding whitespace is ignored. Empty or unparsable text yields 0,
/// matching what an empty number input submits.
pub fn parse_quantity(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(v) => coerce_quantity(v),
        Err(_) => {
            tracing::debug!("Coerced unparsable numeric input {:?} to 0", raw);
            0.0
        }
    }
}

/// Round to the nearest integer, halves away from zero
///
/// Emission values are non-negative, so this matches round-half-up. Values
/// outside the `i64` range saturate; inputs that went through the field
/// boundary never get there (see [`QUANTITY_MAX`]).
#[inline]
pub fn round_kg(value: f64) -> i64 {
    value.round() as i64
}
