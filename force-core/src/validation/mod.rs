//! Field-scoped validation errors and the rules that produce them.
//!
//! A failing field never hides another field's error: every form collects
//! all of its [`FieldError`]s into one [`ValidationErrors`] value, which is
//! what a step submission reports back to the UI.

pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use rules::is_valid_email;

/// Every form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Company details
    CompanyName,
    Industry,
    EmployeeSize,

    // Primary contact
    FirstName,
    LastName,
    Email,
    Phone,

    // Salesforce instance details
    ProductionOrgName,
    ProductionOrgId,
    SandboxOrgName,
    SandboxOrgId,

    // Plan
    Plan,
    BillingCycle,
    CreatorLicenses,
    ViewerLicenses,
    HostingOption,
    CloudProvider,
    ApiKey,
    Region,
    StorageSize,

    // Sign-up
    Password,
    ConfirmPassword,
}

impl Field {
    /// Form field name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Industry => "industry",
            Self::EmployeeSize => "employeeSize",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ProductionOrgName => "productionOrgName",
            Self::ProductionOrgId => "productionOrgId",
            Self::SandboxOrgName => "sandboxOrgName",
            Self::SandboxOrgId => "sandboxOrgId",
            Self::Plan => "plan",
            Self::BillingCycle => "billingCycle",
            Self::CreatorLicenses => "creatorLicenses",
            Self::ViewerLicenses => "viewerLicenses",
            Self::HostingOption => "hostingOption",
            Self::CloudProvider => "cloudProvider",
            Self::ApiKey => "apiKey",
            Self::Region => "region",
            Self::StorageSize => "storageSize",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed its format or requiredness rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All field errors of one form, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`.
    ///
    /// Only the first message per field is kept, so a field reports the
    /// first rule it broke.
    pub fn push(
        &mut self,
        field: Field,
        message: impl Into<String>,
    ) {
        if !self.contains(field) {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn contains(
        &self,
        field: Field,
    ) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The message recorded against `field`, if any.
    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Fields that failed, in check order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Returns `Ok(value())` when nothing failed, otherwise `Err(self)`.
    pub fn finish<T>(
        self,
        value: impl FnOnce() -> T,
    ) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_keeps_first_message_per_field() {
        let mut errors = ValidationErrors::new();

        errors.push(Field::Email, "Email is required");
        errors.push(Field::Email, "Invalid email");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn fields_are_reported_in_check_order() {
        let mut errors = ValidationErrors::new();

        errors.push(Field::CompanyName, "Company name is required");
        errors.push(Field::EmployeeSize, "Employee size is required");

        assert_eq!(errors.fields(), vec![Field::CompanyName, Field::EmployeeSize]);
        assert_eq!(errors.get(Field::Industry), None);
    }

    #[test]
    fn finish_builds_value_only_when_empty() {
        let ok = ValidationErrors::new().finish(|| 7);
        assert_eq!(ok, Ok(7));

        let mut errors = ValidationErrors::new();
        errors.push(Field::Phone, "Phone number is required");
        let err = errors.finish(|| 7).unwrap_err();
        assert_eq!(err.get(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn display_counts_failed_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::FirstName, "First name is required");
        errors.push(Field::LastName, "Last name is required");

        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }

    #[test]
    fn field_error_display_names_field() {
        let error = FieldError {
            field: Field::ApiKey,
            message: "API Key is required".to_string(),
        };

        assert_eq!(error.to_string(), "apiKey: API Key is required");
    }
}
