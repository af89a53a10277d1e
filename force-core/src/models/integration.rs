use serde::{Deserialize, Serialize};

/// Salesforce org identity for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgDetails {
    pub name: String,
    pub org_id: String,
}

/// Salesforce instance details collected by the third wizard step.
///
/// The production org is mandatory; a sandbox org is optional and is
/// stored only when the customer fills in at least one of its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDetails {
    pub production: OrgDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<OrgDetails>,
}
