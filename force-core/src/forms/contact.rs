use serde::{Deserialize, Serialize};

use crate::models::PrimaryContact;
use crate::validation::rules::{required_email, required_text};
use crate::validation::{Field, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn from_contact(contact: &PrimaryContact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<PrimaryContact, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = required_text(
            &mut errors,
            Field::FirstName,
            &self.first_name,
            "First name is required",
        );
        let last_name = required_text(
            &mut errors,
            Field::LastName,
            &self.last_name,
            "Last name is required",
        );
        let email = required_email(
            &mut errors,
            Field::Email,
            &self.email,
            "Email is required",
            "Invalid email",
        );
        let phone = required_text(
            &mut errors,
            Field::Phone,
            &self.phone,
            "Phone number is required",
        );

        errors.finish(|| PrimaryContact {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_form() {
        let contact = valid_form().validate().unwrap();

        assert_eq!(contact.full_name(), "Ada Lovelace");
        assert_eq!(contact.email, "ada@example.com");
    }

    #[test]
    fn validate_rejects_malformed_email_only() {
        let form = ContactForm {
            email: "ada.example.com".to_string(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::Email]);
        assert_eq!(errors.get(Field::Email), Some("Invalid email"));
    }

    #[test]
    fn validate_reports_required_messages() {
        let errors = ContactForm::default().validate().unwrap_err();

        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
    }
}
