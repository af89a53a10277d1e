pub mod calculations;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod scroll_lock;
pub mod services;
pub mod signup;
pub mod validation;
pub mod wizard;

pub use calculations::{PriceInput, PriceQuote, price, quote, starting_price};
pub use forms::{CompanyForm, ContactForm, IntegrationForm, PlanForm};
pub use models::*;
pub use navigation::Route;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use services::{AccountService, ServiceConfig, ServiceError, ServiceRegistry};
pub use signup::{SignUpFlow, SignUpForm, SubmitState};
pub use validation::{Field, FieldError, ValidationErrors};
pub use wizard::{StepSubmission, SubmitOutcome, WizardController, WizardError, WizardStep};
