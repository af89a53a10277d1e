//! In-memory account service that stands in for the real backend.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::account::{AccountService, ServiceError};
use super::factory::{ServiceConfig, ServiceFactory};
use crate::models::{Account, AggregateRecord, SignUpRequest};
use crate::navigation::Route;

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<Account>,
    onboarded: Vec<AggregateRecord>,
}

/// Accepts sign-ups and onboarding records after a fixed delay.
///
/// Emails are compared case-insensitively; a second sign-up with the same
/// address fails with [`ServiceError::EmailTaken`].
#[derive(Debug)]
pub struct SimulatedAccountService {
    latency: Duration,
    fail_signups: bool,
    store: RwLock<Store>,
}

impl SimulatedAccountService {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail_signups: false,
            store: RwLock::new(Store::default()),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            fail_signups: config.fail_signups,
            ..Self::new(Duration::from_millis(config.latency_ms))
        }
    }

    /// Makes every subsequent sign-up fail with [`ServiceError::Unavailable`].
    pub fn failing_signups(mut self) -> Self {
        self.fail_signups = true;
        self
    }

    pub async fn accounts(&self) -> Vec<Account> {
        self.store.read().await.accounts.clone()
    }

    /// Records received through [`AccountService::complete_onboarding`].
    pub async fn onboarded(&self) -> Vec<AggregateRecord> {
        self.store.read().await.onboarded.clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn create_account(
        &self,
        request: SignUpRequest,
    ) -> Result<Account, ServiceError> {
        self.simulate_latency().await;

        if self.fail_signups {
            warn!(email = %request.email, "simulated sign-up failure");
            return Err(ServiceError::Unavailable(
                "sign-up is disabled on this backend".to_string(),
            ));
        }

        let email = request.email.trim().to_lowercase();
        let mut store = self.store.write().await;
        if store.accounts.iter().any(|a| a.email == email) {
            return Err(ServiceError::EmailTaken);
        }

        let account = Account {
            id: store.accounts.len() as u64 + 1,
            email,
            created_at: Utc::now(),
        };
        store.accounts.push(account.clone());

        info!(account_id = account.id, "account registered");
        Ok(account)
    }

    async fn complete_onboarding(
        &self,
        record: AggregateRecord,
    ) -> Result<Route, ServiceError> {
        self.simulate_latency().await;

        match serde_json::to_string(&record) {
            Ok(json) => debug!(record = %json, "onboarding record received"),
            Err(e) => {
                return Err(ServiceError::Rejected(format!(
                    "record could not be serialized: {e}"
                )));
            }
        }

        info!(company = %record.company.name, plan = record.plan.plan.as_str(), "onboarding completed");
        self.store.write().await.onboarded.push(record);
        Ok(Route::Dashboard)
    }
}

/// Registers [`SimulatedAccountService`] under the `"simulated"` backend name.
pub struct SimulatedFactory;

#[async_trait]
impl ServiceFactory for SimulatedFactory {
    fn backend_name(&self) -> &'static str {
        "simulated"
    }

    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn AccountService>, ServiceError> {
        Ok(Box::new(SimulatedAccountService::from_config(config)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(email: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn create_account_assigns_sequential_ids() {
        let service = SimulatedAccountService::new(Duration::ZERO);

        let first = service.create_account(request("ada@example.com")).await.unwrap();
        let second = service.create_account(request("grace@example.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.accounts().await.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        service.create_account(request("ada@example.com")).await.unwrap();

        let result = service.create_account(request("Ada@Example.com")).await;

        assert_eq!(result, Err(ServiceError::EmailTaken));
    }

    #[tokio::test]
    async fn failing_signups_never_store_accounts() {
        let service = SimulatedAccountService::new(Duration::ZERO).failing_signups();

        let result = service.create_account(request("ada@example.com")).await;

        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
        assert!(service.accounts().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn create_account_waits_for_latency() {
        let service = SimulatedAccountService::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        service.create_account(request("ada@example.com")).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn complete_onboarding_lands_on_dashboard() {
        let service = SimulatedAccountService::new(Duration::ZERO);

        let route = service
            .complete_onboarding(AggregateRecord::default())
            .await;

        assert_eq!(route, Ok(Route::Dashboard));
        assert_eq!(service.onboarded().await, vec![AggregateRecord::default()]);
    }

    #[tokio::test]
    async fn factory_honours_fail_signups() {
        let config = ServiceConfig {
            latency_ms: 0,
            fail_signups: true,
            ..ServiceConfig::default()
        };

        let service = SimulatedFactory.create(&config).await.unwrap();
        let result = service.create_account(request("ada@example.com")).await;

        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }
}
