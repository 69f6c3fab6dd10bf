use crate::estimator::Assessment;

/// JSON formatter for assessments
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format assessment as pretty-printed JSON
    pub fn format(assessment: &Assessment) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(assessment)
    }

    /// Format assessment as compact JSON (no whitespace)
    pub fn format_compact(assessment: &Assessment) -> Result<String, serde_json::Error> {
        serde_json::to_string(assessment)
    }
}
