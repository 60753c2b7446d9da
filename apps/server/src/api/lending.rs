use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::DocsResponse};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use lendgate_lending::{
    AccountLendingContracts, AccountRequest, LendingAssetRates, LendingProvider, RatesRequest,
};

/// Lending providers, their info and supported assets.
#[utoipa::path(
    get,
    path = "/api/v1/lending/providers",
    tag = "lending",
    responses((status = 200, description = "Providers that answered, sorted by id"))
)]
pub async fn list_providers(
    State(state): State<Arc<AppState>>,
) -> Json<DocsResponse<Vec<LendingProvider>>> {
    let providers = state.lending_service.list_providers().await;
    Json(DocsResponse::new(providers))
}

/// Lending rates of one provider for one or more assets.
#[utoipa::path(
    post,
    path = "/api/v1/lending/rates/{provider}",
    tag = "lending",
    params(("provider" = String, Path, description = "Lending provider id")),
    responses(
        (status = 200, description = "Rates for the requested assets"),
        (status = 400, description = "Invalid request or asset"),
        (status = 404, description = "Unknown provider"),
        (status = 502, description = "Provider unavailable")
    )
)]
pub async fn get_rates(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    payload: Result<Json<RatesRequest>, JsonRejection>,
) -> ApiResult<Json<DocsResponse<Vec<LendingAssetRates>>>> {
    let Json(request) = payload?;
    let rates = state
        .lending_service
        .get_rates(&provider, &request)
        .await?;
    Ok(Json(DocsResponse::new(rates)))
}

/// Lending contracts held by one or more addresses at one provider.
#[utoipa::path(
    post,
    path = "/api/v1/lending/account/{provider}",
    tag = "lending",
    params(("provider" = String, Path, description = "Lending provider id")),
    responses(
        (status = 200, description = "Contracts per requested address"),
        (status = 400, description = "Invalid request, address or asset"),
        (status = 404, description = "Unknown provider"),
        (status = 502, description = "Provider unavailable")
    )
)]
pub async fn get_accounts(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> ApiResult<Json<DocsResponse<Vec<AccountLendingContracts>>>> {
    let Json(request) = payload?;
    let accounts = state
        .lending_service
        .get_accounts(&provider, &request)
        .await?;
    Ok(Json(DocsResponse::new(accounts)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lending/providers", get(list_providers))
        .route("/lending/rates/{provider}", post(get_rates))
        .route("/lending/account/{provider}", post(get_accounts))
}
