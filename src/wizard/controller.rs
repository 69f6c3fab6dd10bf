//! Wizard Controller
//!
//! Holds the input being edited and the current step, and runs the estimator
//! on submission. Transitions requested from the wrong state are ignored and
//! reported by returning `false`, so a host can call them speculatively.

use crate::benchmark::Comparison;
use crate::estimator::{Assessment, FootprintEstimator};
use crate::input::{FieldError, FieldKind, FieldName, FieldValue, InputModel};
use crate::metrics::FootprintResult;
use crate::recommendations::Recommendation;
use crate::wizard::WizardStep;
use serde::Serialize;
use serde_json::{Map, Value};

/// Where the wizard is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "step", rename_all = "lowercase")]
pub enum WizardState {
    Editing(WizardStep),
    /// Results are computed and waiting for the reveal delay
    Computing,
    Complete,
}

/// Identifies one submission within a wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionId(u64);

/// Stateful coordinator for one wizard session
#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
    input: InputModel,
    assessment: Option<Assessment>,
    /// Submission currently computing or complete
    submission: Option<SubmissionId>,
    submissions_made: u64,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// Open the wizard on the first step with default inputs
    pub fn new() -> Self {
        Self::with_input(InputModel::default())
    }

    /// Open the wizard pre-filled (e.g. from a saved form), coercing every field
    pub fn with_input(input: InputModel) -> Self {
        Self {
            state: WizardState::Editing(WizardStep::FIRST),
            input: input.sanitized(),
            assessment: None,
            submission: None,
            submissions_made: 0,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Current step; the last step once submitted
    pub fn step(&self) -> WizardStep {
        match self.state {
            WizardState::Editing(step) => step,
            WizardState::Computing | WizardState::Complete => WizardStep::LAST,
        }
    }

    /// Zero-based index of [`step`](Self::step)
    pub fn step_index(&self) -> usize {
        self.step().index()
    }

    pub fn input(&self) -> &InputModel {
        &self.input
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, WizardState::Editing(_))
    }

    /// Merge one field into the input
    ///
    /// Numbers are coerced, never rejected. Returns `Ok(false)` when not editing.
    pub fn update_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<bool, FieldError> {
        if !self.is_editing() {
            tracing::debug!("Ignored update of '{}' in state {:?}", field, self.state);
            return Ok(false);
        }

        self.input.set(field, value.into())?;
        tracing::debug!("Updated '{}' -> {:?}", field, self.input.get(field));
        Ok(true)
    }

    /// Merge one field from a raw input event (field name and text value)
    pub fn update_field_raw(&mut self, name: &str, value: &str) -> Result<bool, FieldError> {
        let field: FieldName = name.parse()?;
        self.update_field(field, value)
    }

    /// Merge the current step's fields from a JSON object of raw input
    ///
    /// Every key must name a field; keys of other steps are left for those
    /// steps. Numeric values go through the usual coercion (`null`, `""` and
    /// junk become 0). A `null` option field keeps its current option.
    /// Returns how many fields were merged, 0 when not editing.
    pub fn update_step_from_json(
        &mut self,
        fields: &Map<String, Value>,
    ) -> Result<usize, FieldError> {
        let parsed = fields
            .iter()
            .map(|(name, value)| Ok((name.parse::<FieldName>()?, value)))
            .collect::<Result<Vec<_>, FieldError>>()?;

        let step = match self.state {
            WizardState::Editing(step) => step,
            _ => {
                self.ignore("update_step_from_json");
                return Ok(0);
            }
        };

        let mut merged = 0;
        for (field, value) in parsed {
            if field.step() != step || (value.is_null() && field.kind() == FieldKind::Choice) {
                continue;
            }
            self.input.set(field, FieldValue::from_json(value))?;
            merged += 1;
        }
        tracing::debug!("Merged {} fields on step {:?}", merged, step);
        Ok(merged)
    }

    /// Move to the next step; ignored on the last step or outside editing
    pub fn advance(&mut self) -> bool {
        match self.state {
            WizardState::Editing(step) => match step.next() {
                Some(next) => self.transition(WizardState::Editing(next)),
                None => self.ignore("advance"),
            },
            _ => self.ignore("advance"),
        }
    }

    /// Move to the previous step; ignored on the first step or outside editing
    pub fn retreat(&mut self) -> bool {
        match self.state {
            WizardState::Editing(step) => match step.prev() {
                Some(prev) => self.transition(WizardState::Editing(prev)),
                None => self.ignore("retreat"),
            },
            _ => self.ignore("retreat"),
        }
    }

    /// Compute results for the current input; only valid on the last step
    ///
    /// Leaves the wizard in `Computing` with results already held. The host
    /// moves it to `Complete` via [`finish_computing`](Self::finish_computing),
    /// usually from a [`RevealTimer`](crate::wizard::RevealTimer) holding the
    /// returned id. Returns `None` when not on the last step.
    pub fn submit(&mut self) -> Option<SubmissionId> {
        if self.state != WizardState::Editing(WizardStep::LAST) {
            self.ignore("submit");
            return None;
        }

        self.submissions_made += 1;
        let id = SubmissionId(self.submissions_made);
        self.submission = Some(id);

        self.transition(WizardState::Computing);
        let assessment = FootprintEstimator::estimate(&self.input);
        tracing::info!(
            "Submitted footprint: {} kg CO2e/year ({}), {} recommendations",
            assessment.results.total,
            assessment.comparison.impact_level.as_str(),
            assessment.recommendations.len()
        );
        self.assessment = Some(assessment);
        Some(id)
    }

    /// Id of the submission currently computing or complete
    pub fn submission(&self) -> Option<SubmissionId> {
        self.submission
    }

    /// Reveal computed results
    pub fn finish_computing(&mut self) -> bool {
        if self.state != WizardState::Computing {
            return self.ignore("finish_computing");
        }
        self.transition(WizardState::Complete)
    }

    /// Reveal results only if `id` is still the computing submission
    pub fn finish_computing_for(&mut self, id: SubmissionId) -> bool {
        if self.submission != Some(id) {
            tracing::debug!("Ignored finish_computing for stale submission {:?}", id);
            return false;
        }
        self.finish_computing()
    }

    /// Go back to the first step to recalculate, keeping the input
    pub fn reset(&mut self) -> bool {
        if self.state != WizardState::Complete {
            return self.ignore("reset");
        }
        self.assessment = None;
        self.submission = None;
        self.transition(WizardState::Editing(WizardStep::FIRST))
    }

    /// Full output of the last submission, once complete
    pub fn assessment(&self) -> Option<&Assessment> {
        match self.state {
            WizardState::Complete => self.assessment.as_ref(),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&FootprintResult> {
        self.assessment().map(|a| &a.results)
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.assessment().map(|a| &a.comparison)
    }

    pub fn recommendations(&self) -> Option<&[Recommendation]> {
        self.assessment().map(|a| a.recommendations.as_slice())
    }

    fn transition(&mut self, to: WizardState) -> bool {
        tracing::debug!("Wizard {:?} -> {:?}", self.state, to);
        self.state = to;
        true
    }

    fn ignore(&self, action: &str) -> bool {
        tracing::debug!("Ignored {} in state {:?}", action, self.state);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CarType, HomeSize};

    fn at_last_step() -> WizardController {
        let mut wizard = WizardController::new();
        while wizard.advance() {}
        wizard
    }

    #[test]
    fn test_opens_on_first_step() {
        let wizard = WizardController::new();
        assert_eq!(wizard.state(), WizardState::Editing(WizardStep::Transportation));
        assert_eq!(wizard.step_index(), 0);
        assert_eq!(wizard.input(), &InputModel::default());
        assert!(wizard.results().is_none());
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut wizard = WizardController::new();
        assert!(!wizard.retreat());
        assert_eq!(wizard.state(), WizardState::Editing(WizardStep::Transportation));
    }

    #[test]
    fn test_advance_at_last_step_is_noop() {
        let mut wizard = at_last_step();
        assert_eq!(wizard.step_index(), 3);
        assert!(!wizard.advance());
        assert_eq!(wizard.state(), WizardState::Editing(WizardStep::Consumption));
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut wizard = WizardController::new();
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Food);
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Energy);
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.submit(), None);
        wizard.advance();
        assert_eq!(wizard.submit(), None);
        assert!(wizard.is_editing());
    }

    #[test]
    fn test_submit_then_finish() {
        let mut wizard = at_last_step();
        let id = wizard.submit().expect("on last step");
        assert_eq!(wizard.submission(), Some(id));
        assert_eq!(wizard.state(), WizardState::Computing);
        assert!(wizard.results().is_none());

        assert!(wizard.finish_computing());
        assert_eq!(wizard.state(), WizardState::Complete);
        assert_eq!(wizard.results().map(|r| r.total), Some(0));
        assert_eq!(wizard.recommendations().map(|r| r.len()), Some(0));
    }

    #[test]
    fn test_transitions_ignored_after_submit() {
        let mut wizard = at_last_step();
        wizard.submit();
        assert_eq!(wizard.submit(), None);
        assert!(!wizard.advance());
        assert!(!wizard.retreat());
        assert!(!wizard.reset());
        assert_eq!(wizard.update_field(FieldName::CarMiles, 100.0), Ok(false));
        assert_eq!(wizard.input().car_miles, 0.0);
        assert_eq!(wizard.state(), WizardState::Computing);
    }

    #[test]
    fn test_reset_keeps_input() {
        let mut wizard = WizardController::new();
        wizard.update_field(FieldName::CarMiles, 8000.0).unwrap();
        wizard.update_field(FieldName::HomeSize, HomeSize::Large).unwrap();
        while wizard.advance() {}
        wizard.submit();
        assert!(!wizard.reset());
        wizard.finish_computing();

        assert!(wizard.reset());
        assert_eq!(wizard.state(), WizardState::Editing(WizardStep::Transportation));
        assert_eq!(wizard.input().car_miles, 8000.0);
        assert_eq!(wizard.input().home_size, HomeSize::Large);
        assert!(wizard.assessment().is_none());
    }

    #[test]
    fn test_update_field_raw() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.update_field_raw("carType", "electric"), Ok(true));
        assert_eq!(wizard.update_field_raw("carMiles", "not a number"), Ok(true));
        assert_eq!(wizard.input().car_type, CarType::Electric);
        assert_eq!(wizard.input().car_miles, 0.0);

        assert_eq!(
            wizard.update_field_raw("bikeMiles", "10"),
            Err(FieldError::UnknownField("bikeMiles".to_string()))
        );
        assert!(wizard.update_field_raw("carType", "diesel").is_err());
        assert_eq!(wizard.input().car_type, CarType::Electric);
    }

    #[test]
    fn test_resubmission_gets_new_id() {
        let mut wizard = at_last_step();
        let first = wizard.submit().expect("on last step");
        wizard.finish_computing();
        wizard.reset();
        assert_eq!(wizard.submission(), None);

        while wizard.advance() {}
        let second = wizard.submit().expect("on last step");
        assert_ne!(first, second);

        assert!(!wizard.finish_computing_for(first));
        assert_eq!(wizard.state(), WizardState::Computing);
        assert!(wizard.finish_computing_for(second));
        assert_eq!(wizard.state(), WizardState::Complete);
    }

    #[test]
    fn test_update_step_from_json_coerces() {
        let fields = serde_json::json!({"carMiles": null, "flights": "2", "carType": null});
        let fields = fields.as_object().expect("object");

        let mut wizard = WizardController::new();
        wizard.update_field(FieldName::CarMiles, 500.0).unwrap();
        wizard.update_field(FieldName::CarType, CarType::Hybrid).unwrap();

        assert_eq!(wizard.update_step_from_json(fields), Ok(2));
        assert_eq!(wizard.input().car_miles, 0.0);
        assert_eq!(wizard.input().flights, 2.0);
        assert_eq!(wizard.input().car_type, CarType::Hybrid);
    }

    #[test]
    fn test_update_step_from_json_scoped_to_step() {
        let fields = serde_json::json!({"flights": 3, "electricity": "800"});
        let fields = fields.as_object().expect("object");

        let mut wizard = WizardController::new();
        assert_eq!(wizard.update_step_from_json(fields), Ok(1));
        assert_eq!(wizard.input().electricity, 0.0);

        wizard.advance();
        assert_eq!(wizard.update_step_from_json(fields), Ok(1));
        assert_eq!(wizard.input().electricity, 800.0);

        let unknown = serde_json::json!({"bikeMiles": 10});
        assert_eq!(
            wizard.update_step_from_json(unknown.as_object().expect("object")),
            Err(FieldError::UnknownField("bikeMiles".to_string()))
        );
    }

    #[test]
    fn test_with_input_sanitizes() {
        let wizard = WizardController::with_input(InputModel {
            recycling_habits: 250.0,
            flights: -1.0,
            ..Default::default()
        });
        assert_eq!(wizard.input().recycling_habits, 100.0);
        assert_eq!(wizard.input().flights, 0.0);
    }

    #[test]
    fn test_state_serializes_with_step() {
        let json = serde_json::to_string(&WizardState::Editing(WizardStep::Food)).unwrap();
        assert_eq!(json, r#"{"state":"editing","step":"food"}"#);
        let json = serde_json::to_string(&WizardState::Complete).unwrap();
        assert_eq!(json, r#"{"state":"complete"}"#);
    }
}
