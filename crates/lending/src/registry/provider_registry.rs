//! Provider registry mapping identifiers to backends.
//!
//! The registry is assembled once at startup and never mutated afterwards, so
//! it can be shared across request handlers without locking.

use std::collections::hash_map::{self, HashMap};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::config::{ProviderConfig, RegistryConfig};
use crate::errors::RegistryError;
use crate::provider::remote::DEFAULT_TIMEOUT;
use crate::provider::{LendingApi, RemoteLendingProvider, StaticCatalogProvider};

/// Immutable mapping from provider identifier to backend.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn LendingApi>>,
}

impl ProviderRegistry {
    /// Create a registry keyed by each backend's [`LendingApi::id`].
    ///
    /// Fails if two backends share an identifier.
    pub fn new(backends: Vec<Arc<dyn LendingApi>>) -> Result<Self, RegistryError> {
        let mut providers = HashMap::with_capacity(backends.len());
        for backend in backends {
            let id = backend.id().to_string();
            match providers.entry(id) {
                hash_map::Entry::Occupied(entry) => {
                    return Err(RegistryError::DuplicateProvider(entry.key().clone()));
                }
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(backend);
                }
            }
        }
        Ok(Self { providers })
    }

    /// A registry with no providers.
    pub fn empty() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Build every backend described in the configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut backends: Vec<Arc<dyn LendingApi>> = Vec::with_capacity(config.providers.len());
        for entry in &config.providers {
            let backend: Arc<dyn LendingApi> = match entry {
                ProviderConfig::Static {
                    provider,
                    positions,
                } => Arc::new(StaticCatalogProvider::new(
                    provider.clone(),
                    positions.clone(),
                )?),
                ProviderConfig::Remote {
                    id,
                    base_url,
                    timeout_ms,
                } => Arc::new(RemoteLendingProvider::new(
                    id.clone(),
                    base_url.clone(),
                    timeout_ms.map_or(DEFAULT_TIMEOUT, Duration::from_millis),
                )?),
            };
            backends.push(backend);
        }

        let registry = Self::new(backends)?;
        info!(
            "Registered {} lending providers: {:?}",
            registry.len(),
            registry.ids()
        );
        Ok(registry)
    }

    /// Look up a backend by identifier.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn LendingApi>> {
        self.providers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn LendingApi>)> {
        self.providers.iter().map(|(id, api)| (id.as_str(), api))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
