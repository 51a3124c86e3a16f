//! Approval transaction handler.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::ApprovalParams;
use crate::app_state::AppState;
use crate::domain::TransactionPayload;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /{network}/approve`: Build a token approval transaction.
///
/// # Errors
///
/// Returns [`GatewayError`] on missing parameters or aggregator failure.
#[utoipa::path(
    get,
    path = "/api/v1/{network}/approve",
    tag = "Transactions",
    summary = "Build approval transaction",
    description = "Returns an unsigned transaction approving the aggregator router to spend `amount` of `tokenAddress`.",
    params(
        ("network" = String, Path, description = "Network name"),
        ApprovalParams,
    ),
    responses(
        (status = 200, description = "Approval transaction", body = TransactionPayload),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Aggregator failure", body = ErrorResponse),
    )
)]
pub async fn get_approval(
    State(state): State<AppState>,
    Path(network): Path<String>,
    Query(params): Query<ApprovalParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = params.into_request()?;
    let tx = state.swap_service.approval(&network, &request).await?;
    Ok(Json(tx))
}

/// Approval routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{network}/approve", get(get_approval))
}
