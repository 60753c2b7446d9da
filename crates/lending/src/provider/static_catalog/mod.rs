//! Static catalog provider.
//!
//! Serves a provider descriptor, its asset catalog and a fixed set of
//! per-address positions straight from configuration. Useful for providers
//! whose terms change rarely (fixed-term staking programs) and for local
//! development.
//!
//! Empty-input behavior:
//! - rates with no assets: every catalog asset, in catalog order
//! - accounts with no addresses: an empty result
//! - accounts with no assets: every position held by each address
//!
//! Addresses are matched exactly; `tz1Ab` and `tz1aB` are different accounts.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LendingError, RegistryError};
use crate::models::{
    AccountLendingContracts, AccountRequest, AssetInfo, LendingAssetRates, LendingContract,
    LendingProvider,
};
use crate::provider::LendingApi;

/// A configured deposit of one catalog asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPosition {
    pub symbol: String,
    /// Decimal string
    pub current_amount: String,
}

pub struct StaticCatalogProvider {
    provider: LendingProvider,
    /// Address -> positions, keyed by the exact address string
    positions: HashMap<String, Vec<StaticPosition>>,
}

impl StaticCatalogProvider {
    /// Create a provider from a descriptor and the positions held per address.
    ///
    /// Every position must reference an asset in the descriptor's catalog.
    pub fn new(
        provider: LendingProvider,
        positions: HashMap<String, Vec<StaticPosition>>,
    ) -> Result<Self, RegistryError> {
        if provider.id.trim().is_empty() {
            return Err(RegistryError::InvalidConfig(
                "static provider id must not be empty".to_string(),
            ));
        }

        for (address, held) in &positions {
            if let Some(unknown) = held.iter().find(|p| provider.asset(&p.symbol).is_none()) {
                return Err(RegistryError::InvalidConfig(format!(
                    "provider '{}': position of {} references unknown asset {}",
                    provider.id, address, unknown.symbol
                )));
            }
        }

        Ok(Self {
            provider,
            positions,
        })
    }

    fn catalog_asset(&self, symbol: &str) -> Result<&AssetInfo, LendingError> {
        self.provider
            .asset(symbol)
            .ok_or_else(|| LendingError::InvalidAsset {
                provider: self.provider.id.clone(),
                asset: symbol.to_string(),
            })
    }

    fn contracts_for(
        &self,
        address: &str,
        filter: &[&AssetInfo],
    ) -> Result<Vec<LendingContract>, LendingError> {
        let Some(held) = self.positions.get(address) else {
            return Ok(Vec::new());
        };

        let mut contracts = Vec::with_capacity(held.len());
        for position in held {
            let asset = self.catalog_asset(&position.symbol)?;
            if !filter.is_empty() && !filter.iter().any(|f| f.symbol == asset.symbol) {
                continue;
            }
            contracts.push(LendingContract {
                asset: asset.clone(),
                current_amount: position.current_amount.clone(),
            });
        }
        Ok(contracts)
    }
}

#[async_trait]
impl LendingApi for StaticCatalogProvider {
    fn id(&self) -> &str {
        &self.provider.id
    }

    async fn get_provider_info(&self) -> Result<LendingProvider, LendingError> {
        Ok(self.provider.clone())
    }

    async fn get_current_lending_rates(
        &self,
        assets: &[String],
    ) -> Result<Vec<LendingAssetRates>, LendingError> {
        if assets.is_empty() {
            return Ok(self.provider.assets.iter().map(AssetInfo::rates).collect());
        }

        assets
            .iter()
            .map(|symbol| self.catalog_asset(symbol).map(AssetInfo::rates))
            .collect()
    }

    async fn get_account_lending_contracts(
        &self,
        request: &AccountRequest,
    ) -> Result<Vec<AccountLendingContracts>, LendingError> {
        let filter = request
            .assets
            .iter()
            .map(|symbol| self.catalog_asset(symbol))
            .collect::<Result<Vec<_>, _>>()?;

        let mut accounts = Vec::with_capacity(request.addresses.len());
        for address in &request.addresses {
            if address.trim().is_empty() {
                return Err(LendingError::InvalidAddress {
                    provider: self.provider.id.clone(),
                    address: address.clone(),
                });
            }
            let contracts = self.contracts_for(address, &filter)?;
            debug!(
                "Provider '{}': {} contracts for {}",
                self.provider.id,
                contracts.len(),
                address
            );
            accounts.push(AccountLendingContracts {
                address: address.clone(),
                contracts,
            });
        }
        Ok(accounts)
    }
}
