//! Sign-up form validation and submission state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Account, SignUpRequest};
use crate::navigation::Route;
use crate::services::ServiceError;
use crate::validation::rules::required_email;
use crate::validation::{Field, ValidationErrors};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Page-level message shown when account creation fails for any reason.
pub const REGISTRATION_FAILED: &str =
    "An error occurred during registration. Please try again.";

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for SignUpForm {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SignUpForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

impl SignUpForm {
    pub fn validate(&self) -> Result<SignUpRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = required_email(
            &mut errors,
            Field::Email,
            &self.email,
            "Email is required",
            "Invalid email address",
        );

        if self.password.is_empty() {
            errors.push(Field::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(Field::Password, "Password must be at least 8 characters");
        }

        if self.confirm_password.is_empty() {
            errors.push(Field::ConfirmPassword, "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.push(Field::ConfirmPassword, "Passwords must match");
        }

        errors.finish(|| SignUpRequest {
            email: email.unwrap_or_default(),
            password: self.password.clone(),
        })
    }
}

/// Where a sign-up submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// The last attempt failed; carries the page-level message.
    Failed(String),
}

/// Sign-up page state: the form, whether it was edited, and submission.
#[derive(Debug, Clone, Default)]
pub struct SignUpFlow {
    form: SignUpForm,
    dirty: bool,
    state: SubmitState,
}

impl SignUpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// The page-level failure message, if the last attempt failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replaces the form contents, marking it dirty once it differs from blank.
    pub fn edit(
        &mut self,
        form: SignUpForm,
    ) {
        if form != SignUpForm::default() {
            self.dirty = true;
        }
        self.form = form;
    }

    pub fn errors(&self) -> ValidationErrors {
        self.form.validate().err().unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.dirty && !self.is_submitting() && self.form.validate().is_ok()
    }

    /// Starts a submission, clearing any earlier failure message.
    ///
    /// Returns the request for the account service. Nothing changes when the
    /// form is invalid, untouched, or already submitting.
    pub fn begin(&mut self) -> Option<SignUpRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = self.form.validate().ok()?;
        self.state = SubmitState::Submitting;
        Some(request)
    }

    /// Applies the account service's answer and returns where to go next.
    pub fn finish(
        &mut self,
        result: Result<Account, ServiceError>,
    ) -> Option<Route> {
        match result {
            Ok(account) => {
                tracing::info!(account_id = account.id, "account created");
                self.state = SubmitState::Idle;
                Some(Route::Onboarding)
            }
            Err(e) => {
                warn!(error = %e, "registration failed");
                self.state = SubmitState::Failed(REGISTRATION_FAILED.to_string());
                None
            }
        }
    }
}
