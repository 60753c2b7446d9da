use serde::{Deserialize, Serialize};

/// Asset symbols to fetch rates for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesRequest {
    #[serde(default)]
    pub assets: Vec<String>,
}

/// Addresses to fetch positions for, optionally narrowed to some assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequest {
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub assets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let rates: RatesRequest = serde_json::from_str("{}").unwrap();
        assert!(rates.assets.is_empty());

        let account: AccountRequest = serde_json::from_str(r#"{"addresses":["0x1"]}"#).unwrap();
        assert_eq!(account.addresses, vec!["0x1".to_string()]);
        assert!(account.assets.is_empty());
    }
}
