//! Lending provider trait definitions.

use async_trait::async_trait;

use crate::errors::LendingError;
use crate::models::{AccountLendingContracts, AccountRequest, LendingAssetRates, LendingProvider};

/// Trait for lending and staking provider backends.
///
/// The aggregation service only ever talks to backends through this trait and
/// never inspects which concrete backend it holds.
///
/// How a backend treats an empty `assets` or `addresses` list is up to the
/// backend and must be documented on the implementation.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use lendgate_lending::provider::LendingApi;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl LendingApi for MyProvider {
///     fn id(&self) -> &str {
///         "my-provider"
///     }
///
///     // ... implement the three queries
/// }
/// ```
#[async_trait]
pub trait LendingApi: Send + Sync {
    /// Identifier this backend is registered under.
    fn id(&self) -> &str;

    /// Fetch the provider descriptor and its asset catalog.
    ///
    /// Fails with `ProviderUnavailable` if the upstream cannot be reached.
    async fn get_provider_info(&self) -> Result<LendingProvider, LendingError>;

    /// Fetch current rates for the given asset symbols.
    ///
    /// Fails with `ProviderUnavailable` or `InvalidAsset`.
    async fn get_current_lending_rates(
        &self,
        assets: &[String],
    ) -> Result<Vec<LendingAssetRates>, LendingError>;

    /// Fetch the positions each requested address holds in the requested
    /// assets.
    ///
    /// Fails with `ProviderUnavailable` or `InvalidAddress`.
    async fn get_account_lending_contracts(
        &self,
        request: &AccountRequest,
    ) -> Result<Vec<AccountLendingContracts>, LendingError>;
}
