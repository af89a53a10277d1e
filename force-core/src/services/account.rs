use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Account, AggregateRecord, SignUpRequest};
use crate::navigation::Route;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[async_trait]
pub trait AccountService: Send + Sync {
    /// Registers a new account for the sign-up credentials.
    async fn create_account(
        &self,
        request: SignUpRequest,
    ) -> Result<Account, ServiceError>;

    /// Hands over the finished onboarding record and returns where the
    /// user should land next.
    async fn complete_onboarding(
        &self,
        record: AggregateRecord,
    ) -> Result<Route, ServiceError>;
}
