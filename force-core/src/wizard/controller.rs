use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::step::{StepMarker, StepStatus, WizardStep};
use crate::forms::{CompanyForm, ContactForm, IntegrationForm, PlanForm};
use crate::models::AggregateRecord;
use crate::validation::ValidationErrors;

/// Receives the finished record once the last step is submitted.
pub type OnComplete = Box<dyn FnOnce(AggregateRecord)>;

/// The fields of one step, as submitted or as pre-filled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSubmission {
    Company(CompanyForm),
    Contact(ContactForm),
    Integration(IntegrationForm),
    Plan(PlanForm),
}

impl StepSubmission {
    /// The step these fields belong to.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Company(_) => WizardStep::Company,
            Self::Contact(_) => WizardStep::Contact,
            Self::Integration(_) => WizardStep::Integration,
            Self::Plan(_) => WizardStep::Plan,
        }
    }

    /// Fields for `step`, pre-filled from `record`.
    pub fn prefilled(
        step: WizardStep,
        record: &AggregateRecord,
    ) -> Self {
        match step {
            WizardStep::Company => Self::Company(CompanyForm::from_details(&record.company)),
            WizardStep::Contact => Self::Contact(ContactForm::from_contact(&record.contact)),
            WizardStep::Integration => {
                Self::Integration(IntegrationForm::from_details(&record.integration))
            }
            WizardStep::Plan => Self::Plan(PlanForm::from_selection(&record.plan)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("submitted {received} fields while on the {expected} step")]
    StepMismatch {
        expected: WizardStep,
        received: WizardStep,
    },

    #[error("onboarding has already been completed")]
    AlreadyCompleted,
}

/// What a successful submission led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved on to the given step.
    Advanced(WizardStep),
    /// The last step was accepted and the record handed to the callback.
    Completed,
}

/// Drives the onboarding wizard.
///
/// Holds the current step and the record merged so far. A step's fields
/// are only merged once they validate, and merging a step only replaces
/// that step's section of the record. Submitting the last step moves the
/// record out to the completion callback; the controller keeps no copy.
pub struct WizardController {
    step: WizardStep,
    record: Option<AggregateRecord>,
    errors: ValidationErrors,
    on_complete: Option<OnComplete>,
}

impl WizardController {
    pub fn new(on_complete: impl FnOnce(AggregateRecord) + 'static) -> Self {
        Self {
            step: WizardStep::Company,
            record: Some(AggregateRecord::default()),
            errors: ValidationErrors::new(),
            on_complete: Some(Box::new(on_complete)),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The record merged so far; `None` once onboarding completed.
    pub fn record(&self) -> Option<&AggregateRecord> {
        self.record.as_ref()
    }

    /// Field errors from the last rejected submission of the current step.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_completed(&self) -> bool {
        self.record.is_none()
    }

    /// The current step's fields, pre-filled from the record.
    pub fn draft(&self) -> Option<StepSubmission> {
        self.record
            .as_ref()
            .map(|record| StepSubmission::prefilled(self.step, record))
    }

    /// Validates `fields` against the current step and advances.
    ///
    /// # Errors
    /// * [`WizardError::Validation`] when a field fails; the step and record
    ///   are unchanged and the errors are also kept for [`Self::errors`].
    /// * [`WizardError::StepMismatch`] when `fields` belong to another step.
    /// * [`WizardError::AlreadyCompleted`] after the last step was accepted.
    pub fn submit(
        &mut self,
        fields: StepSubmission,
    ) -> Result<SubmitOutcome, WizardError> {
        let Some(record) = self.record.as_mut() else {
            return Err(WizardError::AlreadyCompleted);
        };

        let received = fields.step();
        if received != self.step {
            return Err(WizardError::StepMismatch {
                expected: self.step,
                received,
            });
        }

        let merged = match fields {
            StepSubmission::Company(form) => form.validate().map(|v| record.company = v),
            StepSubmission::Contact(form) => form.validate().map(|v| record.contact = v),
            StepSubmission::Integration(form) => {
                form.validate().map(|v| record.integration = v)
            }
            StepSubmission::Plan(form) => form.validate().map(|v| record.plan = v),
        };

        if let Err(errors) = merged {
            warn!(step = %self.step, fields = ?errors.fields(), "step rejected");
            self.errors = errors.clone();
            return Err(WizardError::Validation(errors));
        }
        self.errors = ValidationErrors::new();

        match self.step.next() {
            Some(next) => {
                debug!(from = %self.step, to = %next, "wizard advanced");
                self.step = next;
                Ok(SubmitOutcome::Advanced(next))
            }
            None => {
                if let (Some(record), Some(on_complete)) =
                    (self.record.take(), self.on_complete.take())
                {
                    info!(
                        company = %record.company.name,
                        plan = record.plan.plan.as_str(),
                        "onboarding complete"
                    );
                    on_complete(record);
                }
                Ok(SubmitOutcome::Completed)
            }
        }
    }

    /// Returns to the previous step without touching the record.
    ///
    /// A no-op on the first step and after completion.
    pub fn back(&mut self) -> WizardStep {
        if self.is_completed() {
            return self.step;
        }
        if let Some(previous) = self.step.previous() {
            debug!(from = %self.step, to = %previous, "wizard went back");
            self.step = previous;
            self.errors = ValidationErrors::new();
        }
        self.step
    }

    /// Step indicator markers for all four steps.
    pub fn progress(&self) -> [StepMarker; 4] {
        WizardStep::ALL.map(|step| {
            let status = if self.is_completed() || step < self.step {
                StepStatus::Completed
            } else if step == self.step {
                StepStatus::Current
            } else {
                StepStatus::Upcoming
            };
            StepMarker { step, status }
        })
    }
}

impl fmt::Debug for WizardController {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("WizardController")
            .field("step", &self.step)
            .field("record", &self.record)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
