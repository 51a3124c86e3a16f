//! OpenAPI document for the gateway.

use utoipa::OpenApi;

use crate::api::handlers::{approval, quote, swap, system, tokens};
use crate::domain::{QuoteResult, RouteLeg, Token, TokenList, TransactionPayload};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI description of every gateway endpoint.
///
/// Served at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "DEX gateway API",
        description = "Finds the most efficient path for a token swap across protocols on several EVM networks, and builds the approval and swap transactions ready to sign."
    ),
    paths(
        tokens::list_tokens,
        quote::get_rate,
        approval::get_approval,
        swap::get_swap,
        system::health_handler,
        system::networks_handler,
    ),
    components(schemas(
        Token,
        TokenList,
        QuoteResult,
        RouteLeg,
        TransactionPayload,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
        system::NetworkInfo,
    )),
    tags(
        (name = "Tokens", description = "Token discovery"),
        (name = "Quotes", description = "Exchange rates"),
        (name = "Transactions", description = "Approval and swap transaction building"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/{network}/tokens",
            "/api/v1/{network}/rate",
            "/api/v1/{network}/approve",
            "/api/v1/{network}/swap",
            "/health",
            "/config/networks",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
