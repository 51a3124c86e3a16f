//! Token discovery handler.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::TokenList;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /{network}/tokens`: List swappable tokens.
///
/// # Errors
///
/// Returns [`GatewayError`] if the aggregator call fails.
#[utoipa::path(
    get,
    path = "/api/v1/{network}/tokens",
    tag = "Tokens",
    summary = "List swappable tokens",
    description = "Returns every token the aggregator can route on the network, keyed by contract address. Unknown network names fall back to `eth`.",
    params(
        ("network" = String, Path, description = "Network name: eth, bsc, polygon, avalanche, optimism, arbitrum or gnosis"),
    ),
    responses(
        (status = 200, description = "Token map", body = TokenList),
        (status = 500, description = "Aggregator failure", body = ErrorResponse),
    )
)]
pub async fn list_tokens(
    State(state): State<AppState>,
    Path(network): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let tokens = state.swap_service.tokens(&network).await?;
    Ok(Json(tokens))
}

/// Token routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{network}/tokens", get(list_tokens))
}
