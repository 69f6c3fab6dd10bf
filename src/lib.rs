//! Carbon Footprint Estimator
//!
//! Deterministic estimation of annual CO₂-equivalent emissions from lifestyle
//! inputs, with benchmark comparison and recommendations.
//!
//! - `input/`: Input model and field registry with boundary coercion
//! - `metrics/`: Per-category emission calculators (transportation, energy, food, consumption)
//! - `benchmark`: Comparison against the global average and 2°C target
//! - `recommendations/`: Threshold-based suggestions per category
//! - `wizard/`: Four-step input wizard state machine and reveal timer
//! - `estimator`: Coordinator combining the above for one or many submissions

pub mod utils;
pub mod input;
pub mod metrics;
pub mod benchmark;
pub mod recommendations;
pub mod estimator;
pub mod wizard;
pub mod formatters;
pub mod config;

// Re-export commonly used types
pub use input::{CarType, FieldError, FieldName, FieldValue, HeatingType, HomeSize, InputModel};
pub use metrics::{calculate_footprint, Category, CategoryResults, FootprintResult};
pub use benchmark::{compare, Comparison, ImpactLevel, GLOBAL_AVERAGE, TARGET_2C};
pub use recommendations::{generate_recommendations, Priority, Recommendation};
pub use estimator::{Assessment, FootprintEstimator};
pub use wizard::{RevealTimer, SubmissionId, WizardController, WizardState, WizardStep};
pub use config::EstimatorConfig;
