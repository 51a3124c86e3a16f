//! Reshaped exchange quote returned by the rate endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::{BaseUnitAmount, DisplayAmount};
use super::token::{JsonObject, Token};

/// One protocol leg of a route hop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    /// Liquidity source name (e.g. `"PANCAKESWAP_V2"`).
    pub name: String,
    /// Share of the hop routed through this leg, in percent.
    #[schema(value_type = f64)]
    pub part: serde_json::Number,
    /// Token sold on this leg.
    pub from_token_address: String,
    /// Token bought on this leg.
    pub to_token_address: String,
}

/// Quote for exchanging `fromToken` into `toToken`.
///
/// Built fresh for every request from the aggregator's quote payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Token being sold, exactly as the aggregator described it.
    #[schema(value_type = Object)]
    pub from_token: JsonObject,
    /// Token being bought, narrowed to its core fields.
    pub to_token: Token,
    /// Sold amount in display units, truncated to two decimals.
    #[schema(value_type = String, example = "1.00")]
    pub from_token_amount: DisplayAmount,
    /// Sold amount in base units.
    #[schema(value_type = String, example = "1000000000000000000")]
    pub from_token_amount_in_wei: BaseUnitAmount,
    /// Expected bought amount in display units, truncated to two decimals.
    #[schema(value_type = String, example = "454.44")]
    pub expected_amount: DisplayAmount,
    /// Expected bought amount in base units.
    #[schema(value_type = String, example = "454442892848259448028")]
    pub expected_amount_in_wei: BaseUnitAmount,
    /// Hops of the aggregator's preferred route, each split across legs.
    pub exchanges_list: Vec<Vec<RouteLeg>>,
    /// Gas estimate reported by the aggregator; omitted when it sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_gas: Option<u64>,
}
