use serde::{Deserialize, Serialize};

use super::asset::AssetInfo;
use super::types::ProviderId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Lending,
    Staking,
}

/// Display information for a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingProviderInfo {
    pub id: String,
    pub description: String,
    /// Logo URL
    pub image: String,
    pub website: String,
}

/// A lending or staking provider together with its asset catalog.
///
/// `id` is the key the provider is registered under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LendingProvider {
    pub id: ProviderId,
    pub info: LendingProviderInfo,
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    pub assets: Vec<AssetInfo>,
}

impl LendingProvider {
    /// Looks up a catalog asset by symbol, ignoring ASCII case.
    pub fn asset(&self, symbol: &str) -> Option<&AssetInfo> {
        self.assets
            .iter()
            .find(|asset| asset.symbol.eq_ignore_ascii_case(symbol))
    }
}
