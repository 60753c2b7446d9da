use serde::{Deserialize, Serialize};

/// An asset a provider accepts deposits in, with its current yield terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Asset ticker, e.g. "DAI"
    pub symbol: String,

    pub description: String,

    /// Annualized yield as a ratio (0.05 == 5%)
    pub apy: f64,

    /// Validity of the current APY in seconds, 0 for a variable APY
    pub yield_period: i64,

    /// Seconds between yield distributions, e.g. 86400 for daily payouts
    #[serde(rename = "yield_freq")]
    pub yield_frequency: i64,

    /// Decimal string
    pub total_supply: String,

    /// Decimal string
    pub minimum_amount: String,

    /// On-chain token mechanics, omitted entirely when unknown
    #[serde(default, skip_serializing_if = "AssetMetaInfo::is_empty")]
    pub meta_info: AssetMetaInfo,
}

impl AssetInfo {
    /// The rate record describing this asset's current yield.
    pub fn rates(&self) -> LendingAssetRates {
        LendingAssetRates {
            symbol: self.symbol.clone(),
            apy: self.apy,
            yield_period: self.yield_period,
            yield_frequency: self.yield_frequency,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetaInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defi_info: Option<DefiAssetInfo>,
}

impl AssetMetaInfo {
    pub fn is_empty(&self) -> bool {
        self.defi_info.is_none()
    }
}

/// The pair of tokens behind a DeFi position: the deposited asset and the
/// receipt token minted for it (e.g. DAI and cDAI).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefiAssetInfo {
    pub asset_token: DefiTokenInfo,
    pub technical_token: DefiTokenInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefiTokenInfo {
    pub symbol: String,
    pub chain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

/// Current rate information for one asset at one provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LendingAssetRates {
    pub symbol: String,
    pub apy: f64,
    #[serde(default)]
    pub yield_period: i64,
    #[serde(default, rename = "yield_freq")]
    pub yield_frequency: i64,
}
