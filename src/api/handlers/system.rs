//! System endpoints: health check and supported networks.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::network::{ChainId, DEFAULT_NETWORK, NETWORKS};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Supported network entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    network: &'static str,
    #[schema(value_type = u64)]
    chain_id: ChainId,
    is_default: bool,
}

/// `GET /config/networks`: List supported networks.
#[utoipa::path(
    get,
    path = "/config/networks",
    tag = "System",
    summary = "List supported networks",
    description = "Returns every network name the gateway resolves and its aggregator chain id. Any other name is treated as the default network.",
    responses(
        (status = 200, description = "Network catalog", body = Vec<NetworkInfo>),
    )
)]
pub async fn networks_handler() -> impl IntoResponse {
    let networks: Vec<NetworkInfo> = NETWORKS
        .iter()
        .map(|(network, name, chain_id)| NetworkInfo {
            network: *name,
            chain_id: *chain_id,
            is_default: *network == DEFAULT_NETWORK,
        })
        .collect();
    (StatusCode::OK, Json(networks))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/networks", get(networks_handler))
}
