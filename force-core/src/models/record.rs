use serde::{Deserialize, Serialize};

use super::{CompanyDetails, IntegrationDetails, PlanSelection, PrimaryContact};

/// Everything the onboarding wizard has collected so far.
///
/// One section per wizard step. A section still holds its default value
/// until its step is submitted successfully; merging a step only ever
/// replaces that step's own section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub company: CompanyDetails,
    pub contact: PrimaryContact,
    pub integration: IntegrationDetails,
    pub plan: PlanSelection,
}
