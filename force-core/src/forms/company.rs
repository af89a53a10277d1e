use serde::{Deserialize, Serialize};

use crate::models::{CompanyDetails, EmployeeSize, Industry};
use crate::validation::rules::{required_choice, required_text};
use crate::validation::{Field, ValidationErrors};

/// Company details as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyForm {
    pub company_name: String,
    /// Industry label or wire value; blank until one is picked.
    pub industry: String,
    /// Employee-size bracket; blank until one is picked.
    pub employee_size: String,
}

impl CompanyForm {
    /// Pre-fills the form from previously merged details.
    pub fn from_details(details: &CompanyDetails) -> Self {
        Self {
            company_name: details.name.clone(),
            industry: details
                .industry
                .map(|i| i.label().to_string())
                .unwrap_or_default(),
            employee_size: details
                .employee_size
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<CompanyDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(
            &mut errors,
            Field::CompanyName,
            &self.company_name,
            "Company name is required",
        );
        let industry = required_choice(
            &mut errors,
            Field::Industry,
            &self.industry,
            "Industry is required",
            "Select a valid industry",
            Industry::parse,
        );
        let employee_size = required_choice(
            &mut errors,
            Field::EmployeeSize,
            &self.employee_size,
            "Employee size is required",
            "Select a valid employee size",
            EmployeeSize::parse,
        );

        errors.finish(|| CompanyDetails {
            name: name.unwrap_or_default(),
            industry,
            employee_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> CompanyForm {
        CompanyForm {
            company_name: "Acme Corp".to_string(),
            industry: "Technology".to_string(),
            employee_size: "51-200".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_form() {
        let details = valid_form().validate().unwrap();

        assert_eq!(
            details,
            CompanyDetails {
                name: "Acme Corp".to_string(),
                industry: Some(Industry::Technology),
                employee_size: Some(EmployeeSize::UpTo200),
            }
        );
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let errors = CompanyForm::default().validate().unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![Field::CompanyName, Field::Industry, Field::EmployeeSize]
        );
        assert_eq!(errors.get(Field::Industry), Some("Industry is required"));
    }

    #[test]
    fn validate_rejects_unknown_industry() {
        let form = CompanyForm {
            industry: "Aerospace".to_string(),
            ..valid_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.get(Field::Industry), Some("Select a valid industry"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn from_details_round_trips_through_validate() {
        let details = valid_form().validate().unwrap();

        let form = CompanyForm::from_details(&details);

        assert_eq!(form, valid_form());
        assert_eq!(form.validate().unwrap(), details);
    }
}
