use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use lendgate_lending::{
    AccountLendingContracts, AccountRequest, AssetInfo, AssetMetaInfo, LendingApi, LendingContract,
    LendingError, LendingProvider, LendingProviderInfo, LendingAssetRates, ProviderRegistry,
    ProviderType,
};
use lendgate_server::{api::app_router, build_state, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

struct MockProvider {
    id: &'static str,
    should_fail: bool,
    delay: Option<Duration>,
}

fn eth() -> AssetInfo {
    AssetInfo {
        symbol: "ETH".to_string(),
        description: "Ether".to_string(),
        apy: 0.05,
        yield_period: 0,
        yield_frequency: 86400,
        total_supply: "117000000.000000000000000001".to_string(),
        minimum_amount: "0.01".to_string(),
        meta_info: AssetMetaInfo::default(),
    }
}

#[async_trait::async_trait]
impl LendingApi for MockProvider {
    fn id(&self) -> &str {
        self.id
    }

    async fn get_provider_info(&self) -> Result<LendingProvider, LendingError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err(LendingError::unavailable(self.id, "Mock failure"));
        }
        Ok(LendingProvider {
            id: self.id.to_string(),
            info: LendingProviderInfo {
                id: self.id.to_string(),
                description: "Mock".to_string(),
                image: String::new(),
                website: String::new(),
            },
            provider_type: ProviderType::Lending,
            assets: vec![eth()],
        })
    }

    async fn get_current_lending_rates(
        &self,
        _assets: &[String],
    ) -> Result<Vec<LendingAssetRates>, LendingError> {
        if self.should_fail {
            return Err(LendingError::unavailable(self.id, "Mock failure"));
        }
        Ok(vec![eth().rates()])
    }

    async fn get_account_lending_contracts(
        &self,
        request: &AccountRequest,
    ) -> Result<Vec<AccountLendingContracts>, LendingError> {
        if let Some(bad) = request.addresses.iter().find(|a| !a.starts_with("0x")) {
            return Err(LendingError::InvalidAddress {
                provider: self.id.to_string(),
                address: bad.clone(),
            });
        }
        Ok(request
            .addresses
            .iter()
            .map(|address| AccountLendingContracts {
                address: address.clone(),
                contracts: vec![LendingContract {
                    asset: eth(),
                    current_amount: "3.141592653589793238462643383279".to_string(),
                }],
            })
            .collect())
    }
}

fn test_config(providers_file: PathBuf, required: bool) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        providers_file,
        providers_file_required: required,
    }
}

fn mock(id: &'static str, should_fail: bool) -> MockProvider {
    MockProvider {
        id,
        should_fail,
        delay: None,
    }
}

fn router_for(backends: Vec<Arc<dyn LendingApi>>, config: &Config) -> Router {
    let registry = ProviderRegistry::new(backends).unwrap();
    app_router(AppState::new(registry, config), config)
}

fn build_test_router() -> Router {
    let backends: Vec<Arc<dyn LendingApi>> =
        vec![Arc::new(mock("a", false)), Arc::new(mock("b", true))];
    router_for(
        backends,
        &test_config(PathBuf::from("unused.json"), false),
    )
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn providers_listing_skips_failing_backend() {
    let (status, body) = send(
        build_test_router(),
        Method::GET,
        "/api/v1/lending/providers",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let docs = body["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"], "a");
    assert_eq!(docs[0]["type"], "lending");
    assert!(docs[0]["assets"][0].get("meta_info").is_none());
}

#[tokio::test]
async fn providers_listing_answers_despite_hanging_backend() {
    let mut config = test_config(PathBuf::from("unused.json"), false);
    config.request_timeout = Duration::from_millis(500);
    let backends: Vec<Arc<dyn LendingApi>> = vec![
        Arc::new(mock("a", false)),
        Arc::new(MockProvider {
            id: "hanging",
            should_fail: false,
            delay: Some(Duration::from_secs(10)),
        }),
    ];

    let (status, body) = send(
        router_for(backends, &config),
        Method::GET,
        "/api/v1/lending/providers",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let docs = body["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"], "a");
}

#[tokio::test]
async fn rates_for_known_provider() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/rates/a",
        Some(r#"{"assets":["ETH"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"docs": [{"symbol": "ETH", "apy": 0.05, "yield_period": 0, "yield_freq": 86400}]})
    );
}

#[tokio::test]
async fn rates_for_unknown_provider_is_not_found() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/rates/missing",
        Some(r#"{"assets":["ETH"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"code": 404, "message": "Unknown provider missing"}));
}

#[tokio::test]
async fn rates_from_unavailable_provider_is_bad_gateway() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/rates/b",
        Some(r#"{"assets":[]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);
}

#[tokio::test]
async fn account_contracts_keep_decimal_strings() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/account/a",
        Some(r#"{"addresses":["0x1","0x2"],"assets":["ETH"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let docs = body["docs"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["address"], "0x2");
    assert_eq!(
        docs[0]["contracts"][0]["current_amount"],
        "3.141592653589793238462643383279"
    );
    assert_eq!(
        docs[0]["contracts"][0]["asset"]["total_supply"],
        "117000000.000000000000000001"
    );
}

#[tokio::test]
async fn account_for_unknown_provider_is_not_found() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/account/missing",
        Some(r#"{"addresses":["0x1"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Unknown provider missing");
}

#[tokio::test]
async fn invalid_address_is_bad_request() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/account/a",
        Some(r#"{"addresses":["tz1abc"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid address for a: tz1abc");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = send(
        build_test_router(),
        Method::POST,
        "/api/v1/lending/account/a",
        Some(r#"{"addresses": "#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request:"));
}

#[tokio::test]
async fn openapi_document_lists_lending_routes() {
    let (status, body) = send(build_test_router(), Method::GET, "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/lending/providers").is_some());
    assert!(body["paths"].get("/api/v1/lending/rates/{provider}").is_some());
}

#[tokio::test]
async fn state_built_from_provider_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("providers.json");
    let config_json = json!({
        "providers": [{
            "kind": "static",
            "provider": {
                "id": "tezos-baking",
                "info": {"id": "tezos-baking", "description": "Tezos baking", "image": "", "website": ""},
                "type": "staking",
                "assets": [{
                    "symbol": "XTZ",
                    "description": "Tez",
                    "apy": 0.06,
                    "yield_period": 0,
                    "yield_freq": 259200,
                    "total_supply": "800000000",
                    "minimum_amount": "1"
                }]
            }
        }]
    });
    std::fs::write(&path, config_json.to_string()).unwrap();

    let config = test_config(path, true);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let (status, body) = send(app, Method::GET, "/api/v1/lending/providers", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"][0]["id"], "tezos-baking");
    assert_eq!(body["docs"][0]["type"], "staking");
}

#[tokio::test]
async fn missing_default_provider_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path().join("providers.json"), false);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let (status, body) = send(app, Method::GET, "/api/v1/lending/providers", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"docs": []}));
}

#[tokio::test]
async fn missing_required_provider_file_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path().join("providers.json"), true);
    assert!(build_state(&config).await.is_err());
}
