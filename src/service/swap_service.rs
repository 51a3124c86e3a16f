//! Swap service: resolves the chain, calls the aggregator, and reshapes
//! quotes into display amounts.

use crate::aggregator::{
    AggregatorClient, ApprovalRequest, QuoteRequest, RawQuote, SwapRequest, UpstreamError,
};
use crate::domain::{
    ApprovalTx, BaseUnitAmount, JsonObject, QuoteResult, SwapTx, TokenList, resolve_chain,
};
use crate::error::GatewayError;

/// Orchestration layer for the four gateway operations.
///
/// Stateless coordinator around an [`AggregatorClient`]. Every method
/// follows the same pattern: resolve chain → single aggregator call →
/// (quotes only) rescale amounts → return. Inputs arrive already
/// validated, so a failure here is always an upstream or conversion error.
#[derive(Debug, Clone)]
pub struct SwapService {
    client: AggregatorClient,
}

impl SwapService {
    /// Creates a new `SwapService`.
    #[must_use]
    pub fn new(client: AggregatorClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the inner [`AggregatorClient`].
    #[must_use]
    pub fn client(&self) -> &AggregatorClient {
        &self.client
    }

    /// Lists swappable tokens on `network`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] if the aggregator call fails.
    pub async fn tokens(&self, network: &str) -> Result<TokenList, GatewayError> {
        let chain_id = resolve_chain(network);
        let tokens = self.client.list_tokens(chain_id).await?;
        let count = tokens.tokens().map_or(0, serde_json::Map::len);
        tracing::info!(network, %chain_id, count, "token list fetched");
        Ok(tokens)
    }

    /// Quotes `request.amount` of `from` against `to` on `network`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] if the aggregator call fails or
    /// proposes no route, and [`GatewayError::Conversion`] if its amounts
    /// are not well-formed integers.
    pub async fn rate(
        &self,
        network: &str,
        request: &QuoteRequest,
    ) -> Result<QuoteResult, GatewayError> {
        let chain_id = resolve_chain(network);
        let raw = self.client.get_quote(chain_id, request).await?;
        let quote = shape_quote(raw)?;
        tracing::info!(
            network,
            %chain_id,
            amount = %quote.from_token_amount_in_wei,
            expected = %quote.expected_amount_in_wei,
            "quote computed"
        );
        Ok(quote)
    }

    /// Builds the approval transaction for `request.token_address`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] if the aggregator call fails.
    pub async fn approval(
        &self,
        network: &str,
        request: &ApprovalRequest,
    ) -> Result<ApprovalTx, GatewayError> {
        let chain_id = resolve_chain(network);
        let tx = self.client.get_approval(chain_id, request).await?;
        tracing::info!(
            network,
            %chain_id,
            token = %request.token_address,
            spender = tx.to().unwrap_or_default(),
            "approval built"
        );
        Ok(tx)
    }

    /// Builds the swap transaction described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] if the aggregator call fails or
    /// its response carries no transaction.
    pub async fn swap(&self, network: &str, request: &SwapRequest) -> Result<SwapTx, GatewayError> {
        let chain_id = resolve_chain(network);
        let tx = self.client.get_swap_transaction(chain_id, request).await?;
        tracing::info!(
            network,
            %chain_id,
            wallet = %request.from_address,
            slippage = request.slippage_percent,
            router = tx.to().unwrap_or_default(),
            "swap transaction built"
        );
        Ok(tx)
    }
}

/// Converts the aggregator's quote payload into a [`QuoteResult`].
///
/// Keeps the first (best) candidate route; the aggregator orders them.
///
/// # Errors
///
/// Returns [`GatewayError::Upstream`] when no route is present or the sold
/// token has no usable `decimals`, and [`GatewayError::Conversion`] when an
/// amount is not a base-unit integer.
pub fn shape_quote(raw: RawQuote) -> Result<QuoteResult, GatewayError> {
    let from_token_amount_in_wei: BaseUnitAmount = raw.from_token_amount.parse()?;
    let expected_amount_in_wei: BaseUnitAmount = raw.to_token_amount.parse()?;

    let from_decimals = token_decimals(&raw.from_token)?;
    let from_token_amount = from_token_amount_in_wei.to_display(from_decimals)?;
    let expected_amount = expected_amount_in_wei.to_display(raw.to_token.decimals)?;

    let exchanges_list = raw
        .protocols
        .into_iter()
        .next()
        .ok_or(UpstreamError::MissingField("protocols"))?;

    Ok(QuoteResult {
        from_token: raw.from_token,
        to_token: raw.to_token,
        from_token_amount,
        from_token_amount_in_wei,
        expected_amount,
        expected_amount_in_wei,
        exchanges_list,
        estimated_gas: raw.estimated_gas,
    })
}

/// Reads `decimals` from a raw token object.
fn token_decimals(token: &JsonObject) -> Result<u8, UpstreamError> {
    match token.get("decimals") {
        None | Some(serde_json::Value::Null) => {
            Err(UpstreamError::MissingField("fromToken.decimals"))
        }
        Some(value) => value
            .as_u64()
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| UpstreamError::MalformedBody(format!("fromToken.decimals: {value}"))),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ConversionError, RouteLeg, Token};

    const WBNB: &str = "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c";
    const USDT: &str = "0x55d398326f99059ff775485246999027b3197955";

    fn token(address: &str, symbol: &str, decimals: u8) -> Token {
        Token {
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            decimals,
            logo_uri: None,
        }
    }

    fn raw_token(address: &str, symbol: &str, decimals: u8) -> JsonObject {
        let value = serde_json::json!({
            "address": address,
            "symbol": symbol,
            "name": symbol,
            "decimals": decimals,
            "tags": ["native"],
            "eip2612": false
        });
        let serde_json::Value::Object(object) = value else {
            panic!("token literal should be an object");
        };
        object
    }

    fn leg(name: &str) -> RouteLeg {
        RouteLeg {
            name: name.to_string(),
            part: serde_json::Number::from(100),
            from_token_address: WBNB.to_string(),
            to_token_address: USDT.to_string(),
        }
    }

    fn raw_quote() -> RawQuote {
        RawQuote {
            from_token: raw_token(WBNB, "WBNB", 18),
            to_token: token(USDT, "USDT", 18),
            from_token_amount: "1000000000000000000".to_string(),
            to_token_amount: "454442892848259448028".to_string(),
            protocols: vec![
                vec![vec![leg("PANCAKESWAP_V2")]],
                vec![vec![leg("BISWAP")]],
            ],
            estimated_gas: Some(180_000),
        }
    }

    #[test]
    fn shape_quote_rescales_amounts() {
        let Ok(quote) = shape_quote(raw_quote()) else {
            panic!("quote should shape");
        };
        assert_eq!(quote.from_token_amount.to_string(), "1.00");
        assert_eq!(quote.from_token_amount_in_wei.to_string(), "1000000000000000000");
        assert_eq!(quote.expected_amount.to_string(), "454.44");
        assert_eq!(quote.expected_amount_in_wei.to_string(), "454442892848259448028");
        assert_eq!(quote.estimated_gas, Some(180_000));
    }

    #[test]
    fn shape_quote_forwards_sold_token_verbatim() {
        let Ok(quote) = shape_quote(raw_quote()) else {
            panic!("quote should shape");
        };
        assert_eq!(quote.from_token, raw_token(WBNB, "WBNB", 18));
        assert_eq!(quote.from_token["tags"], serde_json::json!(["native"]));
        assert_eq!(quote.to_token, token(USDT, "USDT", 18));
    }

    #[test]
    fn shape_quote_needs_sold_token_decimals() {
        let mut raw = raw_quote();
        raw.from_token.remove("decimals");
        assert!(matches!(
            shape_quote(raw),
            Err(GatewayError::Upstream(UpstreamError::MissingField("fromToken.decimals")))
        ));

        let mut raw = raw_quote();
        raw.from_token.insert("decimals".to_string(), serde_json::json!(300));
        assert!(matches!(
            shape_quote(raw),
            Err(GatewayError::Upstream(UpstreamError::MalformedBody(_)))
        ));
    }

    #[test]
    fn missing_gas_estimate_is_not_invented() {
        let mut raw = raw_quote();
        raw.estimated_gas = None;
        let Ok(quote) = shape_quote(raw) else {
            panic!("quote should shape");
        };
        let Ok(json) = serde_json::to_value(&quote) else {
            panic!("quote should serialize");
        };
        assert!(json.get("estimatedGas").is_none());
    }

    #[test]
    fn shape_quote_keeps_first_route_only() {
        let Ok(quote) = shape_quote(raw_quote()) else {
            panic!("quote should shape");
        };
        assert_eq!(quote.exchanges_list, vec![vec![leg("PANCAKESWAP_V2")]]);
    }

    #[test]
    fn shape_quote_uses_each_tokens_decimals() {
        let mut raw = raw_quote();
        raw.to_token = token(USDT, "USDC", 6);
        raw.to_token_amount = "454449999".to_string();
        let Ok(quote) = shape_quote(raw) else {
            panic!("quote should shape");
        };
        assert_eq!(quote.expected_amount.to_string(), "454.44");
    }

    #[test]
    fn shape_quote_without_routes_is_upstream_error() {
        let mut raw = raw_quote();
        raw.protocols.clear();
        assert!(matches!(
            shape_quote(raw),
            Err(GatewayError::Upstream(UpstreamError::MissingField("protocols")))
        ));
    }

    #[test]
    fn shape_quote_rejects_non_integer_amounts() {
        let mut raw = raw_quote();
        raw.to_token_amount = "12.5".to_string();
        assert!(matches!(
            shape_quote(raw),
            Err(GatewayError::Conversion(ConversionError::InvalidDigit(_)))
        ));

        let mut raw = raw_quote();
        raw.from_token_amount = "-1".to_string();
        assert!(matches!(
            shape_quote(raw),
            Err(GatewayError::Conversion(ConversionError::Negative(_)))
        ));
    }

    #[test]
    fn raw_quote_parses_aggregator_payload() {
        let json = serde_json::json!({
            "fromToken": {"symbol": "BNB", "name": "BNB", "decimals": 18,
                "address": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
                "logoURI": "https://tokens.1inch.io/bnb.png"},
            "toToken": {"symbol": "USDT", "name": "Tether USD", "decimals": 18,
                "address": USDT, "logoURI": "https://tokens.1inch.io/usdt.png",
                "tags": ["tokens"]},
            "toTokenAmount": "454442892848259448028",
            "fromTokenAmount": "1000000000000000000",
            "protocols": [[[{"name": "PANCAKESWAP_V2", "part": 100,
                "fromTokenAddress": WBNB, "toTokenAddress": USDT}]]],
            "estimatedGas": 165_000
        });
        let Ok(raw) = serde_json::from_value::<RawQuote>(json) else {
            panic!("payload should parse");
        };
        assert_eq!(raw.protocols.len(), 1);
        assert_eq!(raw.to_token.symbol, "USDT");
        assert_eq!(raw.estimated_gas, Some(165_000));
        assert_eq!(raw.from_token["logoURI"], "https://tokens.1inch.io/bnb.png");
    }
}
