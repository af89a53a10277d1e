use serde::{Deserialize, Serialize};

use crate::models::{IntegrationDetails, OrgDetails};
use crate::validation::rules::{optional_text, required_text};
use crate::validation::{Field, ValidationErrors};

/// Salesforce production and sandbox org fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationForm {
    pub production_org_name: String,
    pub production_org_id: String,
    pub sandbox_org_name: String,
    pub sandbox_org_id: String,
}

impl IntegrationForm {
    pub fn from_details(details: &IntegrationDetails) -> Self {
        let sandbox = details.sandbox.clone().unwrap_or_default();
        Self {
            production_org_name: details.production.name.clone(),
            production_org_id: details.production.org_id.clone(),
            sandbox_org_name: sandbox.name,
            sandbox_org_id: sandbox.org_id,
        }
    }

    pub fn validate(&self) -> Result<IntegrationDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(
            &mut errors,
            Field::ProductionOrgName,
            &self.production_org_name,
            "Production org name is required",
        );
        let org_id = required_text(
            &mut errors,
            Field::ProductionOrgId,
            &self.production_org_id,
            "Production org ID is required",
        );

        let sandbox_name = optional_text(&self.sandbox_org_name);
        let sandbox_id = optional_text(&self.sandbox_org_id);
        let sandbox = (sandbox_name.is_some() || sandbox_id.is_some()).then(|| OrgDetails {
            name: sandbox_name.unwrap_or_default(),
            org_id: sandbox_id.unwrap_or_default(),
        });

        errors.finish(|| IntegrationDetails {
            production: OrgDetails {
                name: name.unwrap_or_default(),
                org_id: org_id.unwrap_or_default(),
            },
            sandbox,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validate_requires_production_org() {
        let errors = IntegrationForm::default().validate().unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![Field::ProductionOrgName, Field::ProductionOrgId]
        );
    }

    #[test]
    fn validate_omits_blank_sandbox() {
        let form = IntegrationForm {
            production_org_name: "Acme Prod".to_string(),
            production_org_id: "00D5g000004abcd".to_string(),
            sandbox_org_name: "  ".to_string(),
            ..IntegrationForm::default()
        };

        let details = form.validate().unwrap();

        assert_eq!(details.production.org_id, "00D5g000004abcd");
        assert_eq!(details.sandbox, None);
    }

    #[test]
    fn validate_keeps_partial_sandbox() {
        let form = IntegrationForm {
            production_org_name: "Acme Prod".to_string(),
            production_org_id: "00D5g000004abcd".to_string(),
            sandbox_org_name: String::new(),
            sandbox_org_id: "00D5g000009wxyz".to_string(),
        };

        let details = form.validate().unwrap();

        assert_eq!(
            details.sandbox,
            Some(OrgDetails {
                name: String::new(),
                org_id: "00D5g000009wxyz".to_string(),
            })
        );
        assert_eq!(IntegrationForm::from_details(&details), form);
    }
}
