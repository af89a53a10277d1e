use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::account::{AccountService, ServiceError};

/// Backend-agnostic service configuration.
///
/// `backend` must match the [`ServiceFactory::backend_name`] of a
/// registered factory. The remaining fields tune the simulated backend and
/// are ignored by backends that talk to a real server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"simulated"`).
    pub backend: String,
    /// Artificial delay applied to every call.
    pub latency_ms: u64,
    /// Makes every sign-up fail, for exercising the error path.
    pub fail_signups: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: "simulated".to_string(),
            latency_ms: 1000,
            fail_signups: false,
        }
    }
}

/// One implementation per service backend, registered with a
/// [`ServiceRegistry`] at startup.
#[async_trait]
pub trait ServiceFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use service from `config`.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn AccountService>, ServiceError>;
}

/// Registry of [`ServiceFactory`] instances, keyed by backend name.
pub struct ServiceRegistry {
    factories: HashMap<&'static str, Box<dyn ServiceFactory>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry with every backend this crate ships.
    pub fn with_builtin_backends() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::SimulatedFactory));
        registry
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn ServiceFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`ServiceError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn AccountService>, ServiceError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ServiceError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        tracing::debug!(backend = %config.backend, "creating account service");
        factory.create(config).await
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
