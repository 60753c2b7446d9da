//! Remote lending provider.
//!
//! Proxies the three lending queries to an upstream HTTP service that speaks
//! the gateway's own JSON shapes:
//!
//! | Query | Upstream call |
//! |-------|---------------|
//! | provider info | `GET {base_url}/info` |
//! | rates | `POST {base_url}/rates` with a `RatesRequest` body |
//! | accounts | `POST {base_url}/account` with an `AccountRequest` body |
//!
//! Requests are forwarded verbatim, so empty asset or address lists mean
//! whatever the upstream says they mean.
//!
//! Transport failures, undecodable bodies and non-success statuses map to
//! `ProviderUnavailable`, except HTTP 400 which maps to `InvalidAsset` for
//! rates and `InvalidAddress` for accounts.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{LendingError, RegistryError};
use crate::models::{
    AccountLendingContracts, AccountRequest, LendingAssetRates, LendingProvider, RatesRequest,
};
use crate::provider::LendingApi;

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RemoteLendingProvider {
    id: String,
    base_url: String,
    client: Client,
}

impl RemoteLendingProvider {
    pub fn new(
        id: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if id.trim().is_empty() {
            return Err(RegistryError::InvalidConfig(
                "remote provider id must not be empty".to_string(),
            ));
        }
        let valid = Url::parse(&base_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
            .unwrap_or(false);
        if !valid {
            return Err(RegistryError::InvalidConfig(format!(
                "provider '{}': base_url must be an http(s) URL with a host, got '{}'",
                id, base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            id,
            base_url,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a request and decode the JSON body.
    ///
    /// `on_bad_request` turns the body of an HTTP 400 into the backend's input
    /// validation error.
    async fn fetch<T, F>(&self, request: RequestBuilder, on_bad_request: F) -> Result<T, LendingError>
    where
        T: DeserializeOwned,
        F: FnOnce(String) -> LendingError,
    {
        let response = request.send().await.map_err(|e| {
            warn!("Provider '{}' request failed: {}", self.id, e);
            LendingError::unavailable(&self.id, e)
        })?;

        let status = response.status();
        debug!("Provider '{}' responded with {}", self.id, status);

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await.map_err(|e| {
                warn!("Provider '{}' rejected the request with an unreadable body: {}", self.id, e);
                LendingError::unavailable(&self.id, e)
            })?;
            return Err(on_bad_request(body));
        }
        if !status.is_success() {
            return Err(LendingError::unavailable(
                &self.id,
                format!("upstream returned HTTP {}", status.as_u16()),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LendingError::unavailable(&self.id, e))
    }
}

#[async_trait]
impl LendingApi for RemoteLendingProvider {
    fn id(&self) -> &str {
        &self.id
    }

    async fn get_provider_info(&self) -> Result<LendingProvider, LendingError> {
        let request = self.client.get(self.url("info"));
        self.fetch(request, |body| {
            LendingError::unavailable(&self.id, format!("upstream rejected info request: {}", body))
        })
        .await
    }

    async fn get_current_lending_rates(
        &self,
        assets: &[String],
    ) -> Result<Vec<LendingAssetRates>, LendingError> {
        let payload = RatesRequest {
            assets: assets.to_vec(),
        };
        let request = self.client.post(self.url("rates")).json(&payload);
        self.fetch(request, |body| LendingError::InvalidAsset {
            provider: self.id.clone(),
            asset: body,
        })
        .await
    }

    async fn get_account_lending_contracts(
        &self,
        request: &AccountRequest,
    ) -> Result<Vec<AccountLendingContracts>, LendingError> {
        let http_request = self.client.post(self.url("account")).json(request);
        self.fetch(http_request, |body| LendingError::InvalidAddress {
            provider: self.id.clone(),
            address: body,
        })
        .await
    }
}
