//! Registry configuration file.
//!
//! The gateway reads its provider list from a JSON document:
//!
//! ```json
//! { "providers": [
//!     { "kind": "static", "provider": { "id": "pool", "...": "..." },
//!       "positions": { "0xabc": [ { "symbol": "ETH", "current_amount": "1.5" } ] } },
//!     { "kind": "remote", "id": "compound", "base_url": "https://...", "timeout_ms": 10000 }
//! ] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::models::LendingProvider;
use crate::provider::StaticPosition;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

/// One backend to register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Catalog and positions served from the file itself.
    Static {
        provider: LendingProvider,
        /// Address -> positions
        #[serde(default)]
        positions: HashMap<String, Vec<StaticPosition>>,
    },
    /// Upstream HTTP service speaking the gateway's JSON shapes.
    Remote {
        id: String,
        base_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<u64>,
    },
}

impl ProviderConfig {
    pub fn id(&self) -> &str {
        match self {
            Self::Static { provider, .. } => &provider.id,
            Self::Remote { id, .. } => id,
        }
    }
}

impl RegistryConfig {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(contents)?)
    }
}
