//! Bridges the gpui main thread to the account service on the tokio runtime.

use std::sync::Arc;

use force_core::{Account, AccountService, AggregateRecord, Route, ServiceError, SignUpRequest};
use gpui::Global;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

use crate::logging::log_task_error;

/// The account service plus the runtime its futures run on.
///
/// Installed as a gpui global so any view can start a call. Calls return
/// tokio join handles, which a gpui task can await directly.
#[derive(Clone)]
pub struct Services {
    runtime: Handle,
    account: Arc<dyn AccountService>,
}

impl Global for Services {}

impl Services {
    pub fn new(
        runtime: Handle,
        account: Arc<dyn AccountService>,
    ) -> Self {
        Self { runtime, account }
    }

    pub fn create_account(
        &self,
        request: SignUpRequest,
    ) -> JoinHandle<Result<Account, ServiceError>> {
        let account = Arc::clone(&self.account);
        self.runtime
            .spawn(async move { account.create_account(request).await })
    }

    /// Hands the record over without waiting; the outcome is only logged.
    pub fn complete_onboarding_detached(
        &self,
        record: AggregateRecord,
    ) {
        let account = Arc::clone(&self.account);
        self.runtime.spawn(async move {
            let result = account
                .complete_onboarding(record)
                .await
                .map(|route: Route| info!(%route, "onboarding accepted"))
                .map_err(anyhow::Error::from);
            log_task_error("complete_onboarding", result);
        });
    }

    /// Folds a task panic or cancellation into a service error.
    pub fn joined<T>(
        result: Result<Result<T, ServiceError>, JoinError>
    ) -> Result<T, ServiceError> {
        result.unwrap_or_else(|e| {
            Err(ServiceError::Unavailable(format!(
                "service task failed: {e}"
            )))
        })
    }
}
