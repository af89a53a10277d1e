use serde::{Deserialize, Serialize};

use crate::calculations::{PriceInput, PriceQuote, quote};
use crate::models::{
    BillingCycle, CloudProvider, DEFAULT_CREATOR_LICENSES, HostingOption, MIN_STORAGE_GB,
    PlanKind, PlanSelection,
};
use crate::validation::rules::{optional_text, required_count, required_text, required_value};
use crate::validation::{Field, ValidationErrors};

/// Plan step input.
///
/// Choices are typed because they come from fixed option lists; counts are
/// signed and optional because they come from free-text number inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanForm {
    pub plan: Option<PlanKind>,
    pub billing_cycle: Option<BillingCycle>,
    pub creator_licenses: Option<i64>,
    pub viewer_licenses: Option<i64>,
    pub hosting: Option<HostingOption>,
    pub cloud_provider: Option<CloudProvider>,
    pub api_key: String,
    /// Region code or label; blank when none is picked.
    pub region: String,
    pub storage_gb: Option<i64>,
}

impl PlanForm {
    /// Pre-fills every field explicitly from `selection`.
    pub fn from_selection(selection: &PlanSelection) -> Self {
        Self {
            plan: Some(selection.plan),
            billing_cycle: Some(selection.billing_cycle),
            creator_licenses: Some(i64::from(selection.creator_licenses)),
            viewer_licenses: Some(i64::from(selection.viewer_licenses)),
            hosting: Some(selection.hosting),
            cloud_provider: selection.cloud_provider,
            api_key: selection.api_key.clone(),
            region: selection.region.clone().unwrap_or_default(),
            storage_gb: Some(i64::from(selection.storage_gb)),
        }
    }

    /// Switches plan kind, filling any cleared premium field with its default.
    pub fn select_plan(
        &mut self,
        plan: PlanKind,
    ) {
        self.plan = Some(plan);
        if plan != PlanKind::Premium {
            return;
        }

        let defaults = PlanSelection::premium_defaults();
        self.billing_cycle.get_or_insert(defaults.billing_cycle);
        self.creator_licenses
            .get_or_insert(i64::from(defaults.creator_licenses));
        self.viewer_licenses
            .get_or_insert(i64::from(defaults.viewer_licenses));
        self.hosting.get_or_insert(defaults.hosting);
        self.storage_gb.get_or_insert(i64::from(defaults.storage_gb));
    }

    /// Changes provider and drops a region that the new provider lacks.
    pub fn select_provider(
        &mut self,
        provider: CloudProvider,
    ) {
        if provider.region(&self.region).is_none() {
            self.region.clear();
        }
        self.cloud_provider = Some(provider);
    }

    /// The pricing input for the live preview.
    ///
    /// Blank or zero counts fall back to 1 creator, 0 viewers and 10 GB, the
    /// values the calculator would floor them to anyway.
    pub fn price_input(&self) -> PriceInput {
        let or_fallback = |value: Option<i64>, fallback: i64| match value {
            Some(v) if v != 0 => v,
            _ => fallback,
        };

        PriceInput {
            plan: self.plan.unwrap_or_default(),
            billing_cycle: self.billing_cycle.unwrap_or_default(),
            creator_licenses: or_fallback(
                self.creator_licenses,
                i64::from(DEFAULT_CREATOR_LICENSES),
            ),
            viewer_licenses: or_fallback(self.viewer_licenses, 0),
            hosting: self.hosting.unwrap_or_default(),
            storage_gb: or_fallback(self.storage_gb, i64::from(MIN_STORAGE_GB)),
        }
    }

    pub fn quote(&self) -> PriceQuote {
        quote(&self.price_input())
    }

    pub fn validate(&self) -> Result<PlanSelection, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Some(plan) = required_value(&mut errors, Field::Plan, self.plan, "Please select a plan")
        else {
            return Err(errors);
        };

        if plan == PlanKind::Trial {
            return Ok(PlanSelection::default());
        }

        let billing_cycle = required_value(
            &mut errors,
            Field::BillingCycle,
            self.billing_cycle,
            "Billing cycle is required",
        );
        let creator_licenses = required_count(
            &mut errors,
            Field::CreatorLicenses,
            self.creator_licenses,
            1,
            "Number of licenses is required",
            "At least 1 license is required",
        );
        let viewer_licenses = required_count(
            &mut errors,
            Field::ViewerLicenses,
            self.viewer_licenses,
            0,
            "Number of licenses is required",
            "Number must be 0 or greater",
        );
        let hosting = required_value(
            &mut errors,
            Field::HostingOption,
            self.hosting,
            "Hosting option is required",
        );

        let mut selection = PlanSelection::premium_defaults();
        match hosting {
            Some(HostingOption::SelfHosted) => {
                let provider = required_value(
                    &mut errors,
                    Field::CloudProvider,
                    self.cloud_provider,
                    "Cloud provider is required",
                );
                let api_key = required_text(
                    &mut errors,
                    Field::ApiKey,
                    &self.api_key,
                    "API Key is required",
                );
                let region = match (provider, optional_text(&self.region)) {
                    (Some(provider), Some(region)) => match provider.region(&region) {
                        Some(known) => Some(known.code.to_string()),
                        None => {
                            errors.push(
                                Field::Region,
                                "Region is not available for the selected provider",
                            );
                            None
                        }
                    },
                    _ => None,
                };

                selection.hosting = HostingOption::SelfHosted;
                selection.cloud_provider = provider;
                selection.api_key = api_key.unwrap_or_default();
                selection.region = region;
            }
            Some(HostingOption::Company) => {
                let storage_gb = required_count(
                    &mut errors,
                    Field::StorageSize,
                    self.storage_gb,
                    MIN_STORAGE_GB,
                    "Storage size is required",
                    "Minimum storage is 10GB",
                );

                selection.hosting = HostingOption::Company;
                selection.storage_gb = storage_gb.unwrap_or(MIN_STORAGE_GB);
            }
            None => {}
        }

        errors.finish(|| PlanSelection {
            billing_cycle: billing_cycle.unwrap_or_default(),
            creator_licenses: creator_licenses.unwrap_or_default(),
            viewer_licenses: viewer_licenses.unwrap_or_default(),
            ..selection
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn premium_form() -> PlanForm {
        PlanForm::from_selection(&PlanSelection::premium_defaults())
    }

    fn self_hosted_form() -> PlanForm {
        PlanForm {
            hosting: Some(HostingOption::SelfHosted),
            cloud_provider: Some(CloudProvider::Aws),
            api_key: "ak_live_123".to_string(),
            region: "eu-west-1".to_string(),
            ..premium_form()
        }
    }

    // =========================================================================
    // plan kind
    // =========================================================================

    #[test]
    fn plan_is_required() {
        let errors = PlanForm::default().validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::Plan]);
        assert_eq!(errors.get(Field::Plan), Some("Please select a plan"));
    }

    #[test]
    fn trial_ignores_premium_fields() {
        let form = PlanForm {
            plan: Some(PlanKind::Trial),
            creator_licenses: Some(-3),
            storage_gb: Some(1),
            ..PlanForm::default()
        };

        let selection = form.validate().unwrap();

        assert_eq!(selection, PlanSelection::default());
    }

    #[test]
    fn from_selection_holds_explicit_defaults() {
        let form = PlanForm::from_selection(&PlanSelection::default());

        assert_eq!(form.plan, Some(PlanKind::Trial));
        assert_eq!(form.billing_cycle, Some(BillingCycle::Monthly));
        assert_eq!(form.creator_licenses, Some(1));
        assert_eq!(form.viewer_licenses, Some(1));
        assert_eq!(form.hosting, Some(HostingOption::Company));
        assert_eq!(form.storage_gb, Some(10));
    }

    #[test]
    fn select_premium_fills_cleared_fields() {
        let mut form = PlanForm::default();

        form.select_plan(PlanKind::Premium);

        assert_eq!(form, premium_form());
    }

    #[test]
    fn select_premium_keeps_entered_values() {
        let mut form = PlanForm {
            creator_licenses: Some(5),
            ..PlanForm::default()
        };

        form.select_plan(PlanKind::Premium);

        assert_eq!(form.creator_licenses, Some(5));
    }

    // =========================================================================
    // premium, company hosting
    // =========================================================================

    #[test]
    fn premium_defaults_validate() {
        let selection = premium_form().validate().unwrap();

        assert_eq!(selection, PlanSelection::premium_defaults());
    }

    #[test]
    fn license_minimums_are_enforced() {
        let form = PlanForm {
            creator_licenses: Some(0),
            viewer_licenses: Some(-1),
            ..premium_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.get(Field::CreatorLicenses),
            Some("At least 1 license is required")
        );
        assert_eq!(
            errors.get(Field::ViewerLicenses),
            Some("Number must be 0 or greater")
        );
    }

    #[test]
    fn company_hosting_requires_minimum_storage() {
        let form = PlanForm {
            storage_gb: Some(5),
            ..premium_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::StorageSize]);
        assert_eq!(errors.get(Field::StorageSize), Some("Minimum storage is 10GB"));
    }

    #[test]
    fn company_hosting_discards_provider_fields() {
        let form = PlanForm {
            cloud_provider: Some(CloudProvider::Azure),
            api_key: "stale".to_string(),
            storage_gb: Some(250),
            ..premium_form()
        };

        let selection = form.validate().unwrap();

        assert_eq!(selection.cloud_provider, None);
        assert_eq!(selection.api_key, "");
        assert_eq!(selection.storage_gb, 250);
    }

    #[test]
    fn missing_premium_fields_are_all_reported() {
        let form = PlanForm {
            plan: Some(PlanKind::Premium),
            ..PlanForm::default()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![
                Field::BillingCycle,
                Field::CreatorLicenses,
                Field::ViewerLicenses,
                Field::HostingOption,
            ]
        );
    }

    // =========================================================================
    // premium, self hosting
    // =========================================================================

    #[test]
    fn self_hosting_requires_provider_and_api_key() {
        let form = PlanForm {
            hosting: Some(HostingOption::SelfHosted),
            ..premium_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::CloudProvider, Field::ApiKey]);
        assert_eq!(errors.get(Field::CloudProvider), Some("Cloud provider is required"));
        assert_eq!(errors.get(Field::ApiKey), Some("API Key is required"));
    }

    #[test]
    fn self_hosting_with_provider_still_requires_api_key() {
        let form = PlanForm {
            api_key: "   ".to_string(),
            ..self_hosted_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::ApiKey]);
    }

    #[test]
    fn self_hosting_with_api_key_still_requires_provider() {
        let form = PlanForm {
            cloud_provider: None,
            region: String::new(),
            ..self_hosted_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::CloudProvider]);
    }

    #[test]
    fn self_hosting_stores_region_code() {
        let form = PlanForm {
            region: "EU (Ireland)".to_string(),
            ..self_hosted_form()
        };

        let selection = form.validate().unwrap();

        assert_eq!(selection.hosting, HostingOption::SelfHosted);
        assert_eq!(selection.cloud_provider, Some(CloudProvider::Aws));
        assert_eq!(selection.region.as_deref(), Some("eu-west-1"));
        assert_eq!(selection.storage_gb, MIN_STORAGE_GB);
    }

    #[test]
    fn region_must_belong_to_provider() {
        let form = PlanForm {
            region: "westeurope".to_string(),
            ..self_hosted_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.fields(), vec![Field::Region]);
    }

    #[test]
    fn region_is_optional() {
        let form = PlanForm {
            region: String::new(),
            ..self_hosted_form()
        };

        assert_eq!(form.validate().unwrap().region, None);
    }

    #[test]
    fn select_provider_clears_foreign_region() {
        let mut form = self_hosted_form();

        form.select_provider(CloudProvider::Gcs);

        assert_eq!(form.cloud_provider, Some(CloudProvider::Gcs));
        assert_eq!(form.region, "");
    }

    // =========================================================================
    // price preview
    // =========================================================================

    #[test]
    fn preview_of_trial_is_free() {
        let form = PlanForm::from_selection(&PlanSelection::default());

        assert_eq!(form.quote().total, Decimal::ZERO);
    }

    #[test]
    fn preview_falls_back_for_blank_counts() {
        let form = PlanForm {
            creator_licenses: None,
            viewer_licenses: None,
            storage_gb: Some(0),
            ..premium_form()
        };

        let input = form.price_input();

        assert_eq!(input.creator_licenses, 1);
        assert_eq!(input.viewer_licenses, 0);
        assert_eq!(input.storage_gb, 10);
        assert_eq!(form.quote().total, dec!(59));
    }

    #[test]
    fn preview_tracks_annual_discount() {
        let form = PlanForm {
            billing_cycle: Some(BillingCycle::Annual),
            creator_licenses: Some(2),
            viewer_licenses: Some(0),
            ..premium_form()
        };

        assert_eq!(form.quote().total, dec!(86.40));
    }
}
