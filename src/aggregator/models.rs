//! Aggregator request parameters and raw response payloads.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::domain::{BaseUnitAmount, JsonObject, RouteLeg, SwapTx, Token};

/// Quote inputs after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Token to sell.
    pub from_token_address: String,
    /// Token to buy.
    pub to_token_address: String,
    /// Amount to sell, in base units.
    pub amount: BaseUnitAmount,
}

/// Approval inputs after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    /// Token whose spending is approved.
    pub token_address: String,
    /// Allowance, in base units.
    pub amount: BaseUnitAmount,
}

/// Swap inputs after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRequest {
    /// Wallet that signs and sends the swap.
    pub from_address: String,
    /// Token to sell.
    pub from_token_address: String,
    /// Token to buy.
    pub to_token_address: String,
    /// Amount to sell, in base units.
    pub amount: BaseUnitAmount,
    /// Slippage tolerance in percent.
    pub slippage_percent: f64,
    /// Gas limit override, in gas units.
    pub gas_limit: Option<u64>,
    /// Gas price override, in wei.
    pub gas_price: Option<U256>,
}

/// Quote payload as returned by the aggregator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Token being sold, forwarded verbatim.
    pub from_token: JsonObject,
    /// Token being bought.
    pub to_token: Token,
    /// Sold amount in base units.
    pub from_token_amount: String,
    /// Bought amount in base units.
    pub to_token_amount: String,
    /// Candidate routes, best first; each route is a list of hops.
    #[serde(default)]
    pub protocols: Vec<Vec<Vec<RouteLeg>>>,
    /// Gas estimate, when the aggregator reports one.
    #[serde(default)]
    pub estimated_gas: Option<u64>,
}

/// Swap payload; only the transaction is used.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSwap {
    #[serde(default)]
    pub tx: Option<SwapTx>,
}

/// Error body the aggregator sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct RawError {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteQuery<'a> {
    pub from_token_address: &'a str,
    pub to_token_address: &'a str,
    pub amount: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApproveQuery<'a> {
    pub token_address: &'a str,
    pub amount: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwapQuery<'a> {
    pub from_token_address: &'a str,
    pub to_token_address: &'a str,
    pub amount: String,
    pub from_address: &'a str,
    pub slippage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_address: Option<&'a str>,
    pub fee: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    pub disable_estimate: bool,
    pub allow_partial_fill: bool,
}
