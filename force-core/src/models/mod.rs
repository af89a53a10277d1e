mod account;
mod company;
mod contact;
mod integration;
mod plan;
mod record;

pub use account::{Account, SignUpRequest};
pub use company::{CompanyDetails, EmployeeSize, Industry};
pub use contact::PrimaryContact;
pub use integration::{IntegrationDetails, OrgDetails};
pub use plan::{
    BillingCycle, CloudProvider, DEFAULT_CREATOR_LICENSES, DEFAULT_VIEWER_LICENSES, HostingOption,
    MIN_STORAGE_GB, PlanKind, PlanSelection, Region,
};
pub use record::AggregateRecord;
