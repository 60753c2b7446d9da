use serde::{Deserialize, Serialize};

use super::asset::AssetInfo;

/// A deposit held by one address at one provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LendingContract {
    pub asset: AssetInfo,
    /// Decimal string
    pub current_amount: String,
}

/// All positions one address holds at the queried provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountLendingContracts {
    pub address: String,
    pub contracts: Vec<LendingContract>,
}

impl AccountLendingContracts {
    pub fn empty(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            contracts: Vec::new(),
        }
    }
}
