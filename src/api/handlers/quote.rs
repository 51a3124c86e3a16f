//! Exchange rate handler.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::RateParams;
use crate::app_state::AppState;
use crate::domain::QuoteResult;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /{network}/rate`: Quote an exchange between two tokens.
///
/// # Errors
///
/// Returns [`GatewayError`] on missing parameters, aggregator failure, or
/// malformed aggregator amounts.
#[utoipa::path(
    get,
    path = "/api/v1/{network}/rate",
    tag = "Quotes",
    summary = "Get exchange rate",
    description = "Quotes selling `amount` base units of `fromTokenAddress` for `toTokenAddress`. Amounts are returned both in base units and in display units truncated to two decimals, together with the aggregator's preferred route.",
    params(
        ("network" = String, Path, description = "Network name"),
        RateParams,
    ),
    responses(
        (status = 200, description = "Quote computed", body = QuoteResult),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Aggregator or conversion failure", body = ErrorResponse),
    )
)]
pub async fn get_rate(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<RateParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = params.into_request()?;
    let quote = state.swap_service.rate(&network, &request).await?;
    Ok(Json(quote))
}

/// Quote routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{network}/rate", get(get_rate))
}
