use crate::input::FieldName;
use crate::metrics::Category;
use serde::{Deserialize, Serialize};

/// One page of the wizard; one per category, in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Transportation,
    Energy,
    Food,
    Consumption,
}

impl WizardStep {
    pub const ALL: &'static [WizardStep] = &[
        WizardStep::Transportation,
        WizardStep::Energy,
        WizardStep::Food,
        WizardStep::Consumption,
    ];

    pub const FIRST: WizardStep = WizardStep::Transportation;
    pub const LAST: WizardStep = WizardStep::Consumption;

    /// Zero-based position
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Transportation => 0,
            WizardStep::Energy => 1,
            WizardStep::Food => 2,
            WizardStep::Consumption => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn category(&self) -> Category {
        match self {
            WizardStep::Transportation => Category::Transportation,
            WizardStep::Energy => Category::Energy,
            WizardStep::Food => Category::Food,
            WizardStep::Consumption => Category::Consumption,
        }
    }

    pub fn title(&self) -> &'static str {
        self.category().display_name()
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Transportation => "How do you get around?",
            WizardStep::Energy => "How much energy does your home use?",
            WizardStep::Food => "What does your diet look like?",
            WizardStep::Consumption => "What are your shopping and recycling habits?",
        }
    }

    /// Fields collected on this step, in display order
    pub fn fields(&self) -> Vec<FieldName> {
        FieldName::ALL.iter().copied().filter(|f| f.step() == *self).collect()
    }

    /// Progress shown while on this step (25, 50, 75, 100)
    pub fn progress_percent(&self) -> f64 {
        (self.index() + 1) as f64 / Self::ALL.len() as f64 * 100.0
    }
}
