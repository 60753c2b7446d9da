//! Lendgate Lending Crate
//!
//! Provider dispatch and aggregation for decentralized-finance lending data.
//!
//! # Overview
//!
//! The crate answers three questions through a uniform interface:
//! - Which lending/staking providers are available, and which assets do they take?
//! - What are the current rates for some assets at a given provider?
//! - Which positions do some addresses hold at a given provider?
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  LendingService  |  (listing fan-out, single-provider dispatch)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ProviderRegistry |  (immutable id -> backend map, built at startup)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    LendingApi    |  (StaticCatalogProvider, RemoteLendingProvider, ...)
//! +------------------+
//! ```
//!
//! # Error Policy
//!
//! Listing is best-effort: a backend that fails is left out and the listing
//! still succeeds. Rates and account queries name one provider, so an unknown
//! id is reported as [`LendingError::UnknownProvider`] and backend errors are
//! passed through unchanged.

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;

pub use errors::{LendingError, RegistryError};

pub use models::{
    AccountLendingContracts, AccountRequest, AssetInfo, AssetMetaInfo, DefiAssetInfo,
    DefiTokenInfo, LendingAssetRates, LendingContract, LendingProvider, LendingProviderInfo,
    ProviderId, ProviderType, RatesRequest,
};

pub use provider::{LendingApi, RemoteLendingProvider, StaticCatalogProvider, StaticPosition};

pub use registry::{ProviderConfig, ProviderRegistry, RegistryConfig};

pub use service::LendingService;
