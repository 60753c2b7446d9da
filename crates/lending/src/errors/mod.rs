//! Error types for the lending crate.
//!
//! This module provides:
//! - [`LendingError`]: errors returned by backends and the aggregation service
//!   while serving a request
//! - [`RegistryError`]: errors raised while building the provider registry at
//!   startup

use thiserror::Error;

/// Errors that can occur while serving a lending query.
///
/// Single-provider queries surface these to the caller unchanged.
/// Provider listing swallows them (see [`LendingService::list_providers`]).
///
/// [`LendingService::list_providers`]: crate::service::LendingService::list_providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LendingError {
    /// The caller named a provider that is not in the registry.
    #[error("Unknown provider {0}")]
    UnknownProvider(String),

    /// The backend could not reach its upstream source or got an unusable
    /// response from it.
    #[error("Provider unavailable: {provider} - {message}")]
    ProviderUnavailable {
        /// The provider that failed
        provider: String,
        /// Details from the backend
        message: String,
    },

    /// The backend rejected one of the requested asset symbols.
    #[error("Invalid asset for {provider}: {asset}")]
    InvalidAsset {
        /// The provider that rejected the asset
        provider: String,
        /// The offending symbol, or the upstream explanation
        asset: String,
    },

    /// The backend rejected one of the requested addresses.
    #[error("Invalid address for {provider}: {address}")]
    InvalidAddress {
        /// The provider that rejected the address
        provider: String,
        /// The offending address, or the upstream explanation
        address: String,
    },
}

impl LendingError {
    pub fn unavailable(provider: impl Into<String>, message: impl ToString) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.to_string(),
        }
    }

    /// Whether the error was caused by the request itself rather than by the
    /// backend.
    ///
    /// ```
    /// use lendgate_lending::errors::LendingError;
    ///
    /// assert!(LendingError::UnknownProvider("nope".to_string()).is_client_error());
    /// assert!(!LendingError::unavailable("compound", "timeout").is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::UnknownProvider(_) | Self::InvalidAsset { .. } | Self::InvalidAddress { .. } => {
                true
            }
            Self::ProviderUnavailable { .. } => false,
        }
    }
}

/// Errors raised while assembling the provider registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two backends claimed the same identifier.
    #[error("Duplicate provider id: {0}")]
    DuplicateProvider(String),

    #[error("Failed to read provider config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse provider config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an impossible backend.
    #[error("Invalid provider config: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
