//! Token metadata as published by the aggregator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Narrowed token view used for the bought side of a quote.
///
/// Keeps only these fields of the aggregator's token object and never
/// rewrites their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Token {
    /// Contract address (hex, compared case-insensitively).
    pub address: String,
    /// Ticker symbol (e.g. `"USDT"`).
    #[serde(default)]
    pub symbol: String,
    /// Full token name.
    #[serde(default)]
    pub name: String,
    /// Decimal exponent between base units and display units.
    pub decimals: u8,
    /// Logo image URL, when the aggregator has one.
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// JSON object forwarded from the aggregator without interpretation.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Swappable tokens on one chain, exactly as the aggregator lists them.
///
/// The body is kept as raw JSON so every upstream field (`tags`,
/// `eip2612`, ...) reaches the caller untouched, and an odd entry cannot
/// fail the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct TokenList(JsonObject);

impl TokenList {
    /// Returns the address to token mapping, if the body carries one.
    #[must_use]
    pub fn tokens(&self) -> Option<&JsonObject> {
        self.0.get("tokens").and_then(serde_json::Value::as_object)
    }

    /// Returns the raw body.
    #[must_use]
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }
}
