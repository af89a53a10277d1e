//! Raw form input for each onboarding step and its validation.
//!
//! Forms hold what the user typed or picked, untrimmed and unparsed.
//! `validate` turns a form into the typed section of the
//! [`AggregateRecord`](crate::AggregateRecord), or into the field errors
//! that stop the step from advancing.

mod company;
mod contact;
mod integration;
mod plan;

pub use company::CompanyForm;
pub use contact::ContactForm;
pub use integration::IntegrationForm;
pub use plan::PlanForm;
