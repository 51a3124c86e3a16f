//! HTTP client for the aggregator's token, quote, approval and swap APIs.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::UpstreamError;
use super::models::{
    ApprovalRequest, ApproveQuery, QuoteQuery, QuoteRequest, RawError, RawQuote, RawSwap,
    SwapQuery, SwapRequest,
};
use super::INTEGRATOR_FEE_PERCENT;
use crate::domain::{ApprovalTx, ChainId, SwapTx, TokenList};

/// Thin wrapper over a shared [`reqwest::Client`] bound to one aggregator.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AggregatorClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    referrer_address: Option<String>,
}

impl AggregatorClient {
    /// Creates a client for the aggregator rooted at `base_url`
    /// (e.g. `https://api.1inch.io/v4.0`).
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Transport`] if the HTTP client cannot be
    /// built (TLS backend initialization failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            api_key: None,
            referrer_address: None,
        })
    }

    /// Sends `api_key` as a bearer token on every call.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the integrator address credited with the swap fee.
    #[must_use]
    pub fn with_referrer(mut self, referrer_address: Option<String>) -> Self {
        self.referrer_address = referrer_address;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{chain}/tokens`
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn list_tokens(&self, chain_id: ChainId) -> Result<TokenList, UpstreamError> {
        let no_query: [(&str, &str); 0] = [];
        self.get(chain_id, "tokens", &no_query).await
    }

    /// `GET {base}/{chain}/quote`
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn get_quote(
        &self,
        chain_id: ChainId,
        request: &QuoteRequest,
    ) -> Result<RawQuote, UpstreamError> {
        let query = QuoteQuery {
            from_token_address: &request.from_token_address,
            to_token_address: &request.to_token_address,
            amount: request.amount.to_string(),
        };
        self.get(chain_id, "quote", &query).await
    }

    /// `GET {base}/{chain}/approve/transaction`
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn get_approval(
        &self,
        chain_id: ChainId,
        request: &ApprovalRequest,
    ) -> Result<ApprovalTx, UpstreamError> {
        let query = ApproveQuery {
            token_address: &request.token_address,
            amount: request.amount.to_string(),
        };
        self.get(chain_id, "approve/transaction", &query).await
    }

    /// `GET {base}/{chain}/swap`, returning only the `tx` object.
    ///
    /// Always sends the integrator fee, `disableEstimate=true` and
    /// `allowPartialFill=false`. Gas overrides are omitted when unset.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::MissingField`] if the response has no `tx`,
    /// otherwise the same failures as the other calls.
    pub async fn get_swap_transaction(
        &self,
        chain_id: ChainId,
        request: &SwapRequest,
    ) -> Result<SwapTx, UpstreamError> {
        let query = SwapQuery {
            from_token_address: &request.from_token_address,
            to_token_address: &request.to_token_address,
            amount: request.amount.to_string(),
            from_address: &request.from_address,
            slippage: request.slippage_percent.to_string(),
            referrer_address: self.referrer_address.as_deref(),
            fee: INTEGRATOR_FEE_PERCENT,
            gas_limit: request.gas_limit.map(|g| g.to_string()),
            gas_price: request.gas_price.map(|g| g.to_string()),
            disable_estimate: true,
            allow_partial_fill: false,
        };
        let swap: RawSwap = self.get(chain_id, "swap", &query).await?;
        swap.tx.ok_or(UpstreamError::MissingField("tx"))
    }

    async fn get<Q, T>(&self, chain_id: ChainId, path: &str, query: &Q) -> Result<T, UpstreamError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{chain_id}/{path}", self.base_url);
        let mut request = self.http.get(&url).query(query);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        tracing::debug!(%chain_id, path, "calling aggregator");
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(%chain_id, path, status = status.as_u16(), %message, "aggregator error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%chain_id, path, error = %e, "unexpected aggregator body");
            UpstreamError::MalformedBody(e.to_string())
        })
    }
}

/// Extracts the aggregator's error description, falling back to the raw body.
fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<RawError>(body) {
        Ok(RawError {
            description: Some(description),
            ..
        }) => description,
        Ok(RawError {
            error: Some(error), ..
        }) => error,
        _ => String::from_utf8_lossy(body).trim().to_string(),
    }
}
