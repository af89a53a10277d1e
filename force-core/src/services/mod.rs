//! Collaborators the UI calls for account creation and onboarding completion.

pub mod account;
pub mod factory;
pub mod simulated;

pub use account::{AccountService, ServiceError};
pub use factory::{ServiceConfig, ServiceFactory, ServiceRegistry};
pub use simulated::{SimulatedAccountService, SimulatedFactory};
