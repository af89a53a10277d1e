use serde::{Deserialize, Serialize};

/// Subscription tier chosen in the final wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    #[default]
    Trial,
    Premium,
}

impl PlanKind {
    pub const ALL: [PlanKind; 2] = [Self::Trial, Self::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Trial => "Free Trial",
            Self::Premium => "Premium Plan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s || plan.label() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [Self::Monthly, Self::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual (20% discount)",
        }
    }

    /// Short caption shown under a price.
    pub fn billed_caption(&self) -> &'static str {
        match self {
            Self::Monthly => "Billed monthly",
            Self::Annual => "Billed annually",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|cycle| cycle.as_str() == s || cycle.label() == s)
    }
}

/// Where the customer's analytics storage and compute live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostingOption {
    /// Customer-provisioned cloud; storage is billed by the customer's provider.
    #[serde(rename = "self")]
    SelfHosted,
    /// Vendor cloud; storage is billed per GB.
    #[default]
    Company,
}

impl HostingOption {
    pub const ALL: [HostingOption; 2] = [Self::SelfHosted, Self::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfHosted => "self",
            Self::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SelfHosted => "Self-Hosted",
            Self::Company => "Company Cloud",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SelfHosted => "Use your own cloud infrastructure",
            Self::Company => "Use our secure cloud infrastructure",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|hosting| hosting.as_str() == s || hosting.label() == s)
    }
}

/// A selectable deployment region of a cloud provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub code: &'static str,
    pub label: &'static str,
}

const AWS_REGIONS: [Region; 4] = [
    Region { code: "us-east-1", label: "US East (N. Virginia)" },
    Region { code: "us-west-1", label: "US West (N. California)" },
    Region { code: "eu-west-1", label: "EU (Ireland)" },
    Region { code: "ap-northeast-1", label: "Asia Pacific (Tokyo)" },
];

const AZURE_REGIONS: [Region; 4] = [
    Region { code: "eastus", label: "East US" },
    Region { code: "westus2", label: "West US 2" },
    Region { code: "westeurope", label: "West Europe" },
    Region { code: "southeastasia", label: "Southeast Asia" },
];

const GCS_REGIONS: [Region; 4] = [
    Region { code: "us-central1", label: "US Central (Iowa)" },
    Region { code: "us-east1", label: "US East (S. Carolina)" },
    Region { code: "europe-west1", label: "Europe West (Belgium)" },
    Region { code: "asia-east1", label: "Asia East (Taiwan)" },
];

/// Cloud provider for self-hosted deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcs,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [Self::Aws, Self::Azure, Self::Gcs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Gcs => "gcs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcs => "Google Cloud",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s || provider.label() == s)
    }

    /// Regions offered for this provider, in display order.
    pub fn regions(&self) -> &'static [Region] {
        match self {
            Self::Aws => &AWS_REGIONS,
            Self::Azure => &AZURE_REGIONS,
            Self::Gcs => &GCS_REGIONS,
        }
    }

    /// Looks a region up by code or label.
    pub fn region(
        &self,
        s: &str,
    ) -> Option<&'static Region> {
        let s = s.trim();
        self.regions()
            .iter()
            .find(|region| region.code == s || region.label == s)
    }
}

pub const DEFAULT_CREATOR_LICENSES: u32 = 1;
pub const DEFAULT_VIEWER_LICENSES: u32 = 1;
pub const MIN_STORAGE_GB: u32 = 10;

/// Plan configuration collected by the final wizard step.
///
/// The [`Default`] value is the state the wizard starts with: a trial plan
/// whose premium fields already hold the premium defaults, so selecting
/// premium never needs to patch values in after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSelection {
    pub plan: PlanKind,
    pub billing_cycle: BillingCycle,
    pub creator_licenses: u32,
    pub viewer_licenses: u32,
    pub hosting: HostingOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProvider>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub storage_gb: u32,
}

impl Default for PlanSelection {
    fn default() -> Self {
        Self {
            plan: PlanKind::Trial,
            billing_cycle: BillingCycle::Monthly,
            creator_licenses: DEFAULT_CREATOR_LICENSES,
            viewer_licenses: DEFAULT_VIEWER_LICENSES,
            hosting: HostingOption::Company,
            cloud_provider: None,
            api_key: String::new(),
            region: None,
            storage_gb: MIN_STORAGE_GB,
        }
    }
}

impl PlanSelection {
    /// The values a premium plan starts from when first selected.
    pub fn premium_defaults() -> Self {
        Self {
            plan: PlanKind::Premium,
            ..Self::default()
        }
    }

    pub fn is_premium(&self) -> bool {
        self.plan == PlanKind::Premium
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_selection_is_monthly_trial_on_company_cloud() {
        let selection = PlanSelection::default();

        assert_eq!(selection.plan, PlanKind::Trial);
        assert_eq!(selection.billing_cycle, BillingCycle::Monthly);
        assert_eq!(selection.creator_licenses, 1);
        assert_eq!(selection.viewer_licenses, 1);
        assert_eq!(selection.hosting, HostingOption::Company);
        assert_eq!(selection.storage_gb, 10);
        assert_eq!(selection.cloud_provider, None);
    }

    #[test]
    fn premium_defaults_only_change_the_plan() {
        let premium = PlanSelection::premium_defaults();

        assert_eq!(
            premium,
            PlanSelection {
                plan: PlanKind::Premium,
                ..PlanSelection::default()
            }
        );
        assert!(premium.is_premium());
    }

    #[test]
    fn hosting_self_uses_self_as_wire_value() {
        let json = serde_json::to_string(&HostingOption::SelfHosted).unwrap();

        assert_eq!(json, "\"self\"");
        assert_eq!(HostingOption::parse("self"), Some(HostingOption::SelfHosted));
    }

    #[test]
    fn every_provider_offers_four_regions() {
        for provider in CloudProvider::ALL {
            assert_eq!(provider.regions().len(), 4, "{provider:?}");
        }
    }

    #[test]
    fn region_lookup_is_scoped_to_provider() {
        assert_eq!(
            CloudProvider::Aws.region("eu-west-1").map(|r| r.label),
            Some("EU (Ireland)")
        );
        assert_eq!(
            CloudProvider::Gcs.region("Asia East (Taiwan)").map(|r| r.code),
            Some("asia-east1")
        );
        assert!(CloudProvider::Azure.region("eu-west-1").is_none());
    }

    #[test]
    fn cloud_provider_parse_accepts_label() {
        assert_eq!(CloudProvider::parse("Google Cloud"), Some(CloudProvider::Gcs));
        assert_eq!(CloudProvider::parse("gcs"), Some(CloudProvider::Gcs));
        assert_eq!(CloudProvider::parse("oracle"), None);
    }
}
