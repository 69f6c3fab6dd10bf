//! Input wizard
//!
//! - `steps`: the four category steps and their presentation metadata
//! - `controller`: the editing / computing / complete state machine
//! - `timer`: host-owned reveal delay between computing and complete

pub mod steps;
pub mod controller;
pub mod timer;

pub use steps::WizardStep;
pub use controller::{SubmissionId, WizardController, WizardState};
pub use timer::{Clock, ManualClock, RevealTimer, SystemClock};
