//! Swap transaction handler.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::SwapParams;
use crate::app_state::AppState;
use crate::domain::TransactionPayload;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /{network}/swap`: Build a swap transaction.
///
/// # Errors
///
/// Returns [`GatewayError`] on missing or invalid parameters, aggregator
/// failure, or a response without a transaction.
#[utoipa::path(
    get,
    path = "/api/v1/{network}/swap",
    tag = "Transactions",
    summary = "Build swap transaction",
    description = "Returns an unsigned transaction swapping `amountTrade` of `fromTokenAddress` into `toTokenAddress` from `walletAddress`. Slippage defaults to 1%. Partial fills are disabled and the integrator fee is always applied.",
    params(
        ("network" = String, Path, description = "Network name"),
        SwapParams,
    ),
    responses(
        (status = 200, description = "Swap transaction", body = TransactionPayload),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Aggregator failure", body = ErrorResponse),
    )
)]
pub async fn get_swap(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<SwapParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = params.into_request()?;
    let tx = state.swap_service.swap(&network, &request).await?;
    Ok(Json(tx))
}

/// Swap routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{network}/swap", get(get_swap))
}
