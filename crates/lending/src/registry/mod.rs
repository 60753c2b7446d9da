//! Provider registry module.
//!
//! This module provides:
//! - The immutable identifier -> backend mapping built at startup
//! - The configuration file describing which backends to build

mod config;
mod provider_registry;

pub use config::{ProviderConfig, RegistryConfig};
pub use provider_registry::ProviderRegistry;
