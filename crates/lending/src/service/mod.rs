//! Aggregation service.
//!
//! Dispatches lending queries to the backends in a [`ProviderRegistry`]:
//! - listing asks every backend and keeps whatever succeeds
//! - rates and account queries go to exactly one named backend and surface
//!   its errors unchanged

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::errors::LendingError;
use crate::models::{
    AccountLendingContracts, AccountRequest, LendingAssetRates, LendingProvider, RatesRequest,
};
use crate::provider::LendingApi;
use crate::registry::ProviderRegistry;

/// Default deadline for each backend during a provider listing
pub const DEFAULT_LISTING_TIMEOUT: Duration = Duration::from_secs(10);

pub struct LendingService {
    registry: Arc<ProviderRegistry>,
    listing_timeout: Duration,
}

impl LendingService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self::with_listing_timeout(registry, DEFAULT_LISTING_TIMEOUT)
    }

    /// Create a service whose listing gives each backend at most
    /// `listing_timeout` to describe itself.
    pub fn with_listing_timeout(registry: Arc<ProviderRegistry>, listing_timeout: Duration) -> Self {
        Self {
            registry,
            listing_timeout,
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// List every provider whose backend answers, sorted by id.
    ///
    /// Backends are queried concurrently. A backend that fails or misses the
    /// listing deadline is logged and left out; the listing itself never fails
    /// and is empty when every backend fails.
    ///
    /// Entries are keyed by registry id: a descriptor reporting a different id
    /// is rewritten so the id can be used in rates and account queries.
    pub async fn list_providers(&self) -> Vec<LendingProvider> {
        let deadline = self.listing_timeout;
        let lookups = self.registry.iter().map(|(id, api)| async move {
            let result = match tokio::time::timeout(deadline, api.get_provider_info()).await {
                Ok(result) => result,
                Err(_) => Err(LendingError::unavailable(
                    id,
                    format!("no answer within {} ms", deadline.as_millis()),
                )),
            };
            (id, result)
        });

        let mut providers = Vec::with_capacity(self.registry.len());
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(mut provider) => {
                    if provider.id != id {
                        warn!(
                            "Provider registered as '{}' describes itself as '{}', listing it as '{}'",
                            id, provider.id, id
                        );
                        provider.id = id.to_string();
                    }
                    providers.push(provider);
                }
                Err(e) => {
                    warn!("Skipping provider '{}' in listing: {}", id, e);
                }
            }
        }

        providers.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(
            "Listed {} of {} providers",
            providers.len(),
            self.registry.len()
        );
        providers
    }

    /// Current rates for the requested assets at one provider.
    pub async fn get_rates(
        &self,
        provider_id: &str,
        request: &RatesRequest,
    ) -> Result<Vec<LendingAssetRates>, LendingError> {
        let api = self.resolve(provider_id)?;
        api.get_current_lending_rates(&request.assets).await
    }

    /// Positions held by the requested addresses at one provider.
    pub async fn get_accounts(
        &self,
        provider_id: &str,
        request: &AccountRequest,
    ) -> Result<Vec<AccountLendingContracts>, LendingError> {
        let api = self.resolve(provider_id)?;
        api.get_account_lending_contracts(request).await
    }

    fn resolve(&self, provider_id: &str) -> Result<&Arc<dyn LendingApi>, LendingError> {
        self.registry.get(provider_id).ok_or_else(|| {
            debug!("Lending query for unknown provider '{}'", provider_id);
            LendingError::UnknownProvider(provider_id.to_string())
        })
    }
}
