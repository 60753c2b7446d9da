//! Domain models for lending data.
//!
//! Everything here is plain data. Quantities that need arbitrary precision
//! (`total_supply`, `minimum_amount`, `current_amount`) are kept as decimal
//! strings and never parsed, so they round-trip exactly between providers with
//! different decimal scales. `apy` is the only floating-point field.

mod asset;
mod contract;
mod provider;
mod request;
mod types;

pub use asset::{AssetInfo, AssetMetaInfo, DefiAssetInfo, DefiTokenInfo, LendingAssetRates};
pub use contract::{AccountLendingContracts, LendingContract};
pub use provider::{LendingProvider, LendingProviderInfo, ProviderType};
pub use request::{AccountRequest, RatesRequest};
pub use types::ProviderId;
