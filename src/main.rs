//! dex-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dex_gateway::aggregator::AggregatorClient;
use dex_gateway::api;
use dex_gateway::app_state::AppState;
use dex_gateway::config::GatewayConfig;
use dex_gateway::service::SwapService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        aggregator = %config.aggregator_url,
        "starting dex-gateway"
    );
    if config.referrer_address.is_none() {
        tracing::warn!("REFERRER_ADDRESS not set; swaps will carry no fee recipient");
    }

    // Build aggregator client and service layer
    let client = AggregatorClient::new(config.aggregator_url.clone())?
        .with_api_key(config.aggregator_api_key.clone())
        .with_referrer(config.referrer_address.clone());
    let app_state = AppState::new(SwapService::new(client));

    // Build router
    let app = Router::new().merge(api::build_router());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };

    let app = app
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
