//! The four-step onboarding wizard.

mod controller;
mod step;

pub use controller::{OnComplete, StepSubmission, SubmitOutcome, WizardController, WizardError};
pub use step::{StepMarker, StepStatus, WizardStep};
