//! Pages and the pieces they share.

mod dashboard;
mod landing;
mod navbar;
mod onboarding;
mod placeholder;
mod signup;
pub mod wizard;

use force_core::Route;

pub use dashboard::dashboard_page;
pub use landing::landing_page;
pub use navbar::navbar;
pub use onboarding::{MODAL_CONTEXT, OnboardingView};
pub use placeholder::placeholder_page;
pub use signup::SignUpView;
pub use wizard::{WizardEvent, WizardView};

/// Asks the window shell to show another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigate(pub Route);
