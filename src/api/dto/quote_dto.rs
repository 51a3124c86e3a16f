//! Token list and quote DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

use super::common_dto::{RequiredFields, parse_amount};
use crate::aggregator::QuoteRequest;
use crate::error::GatewayError;

/// Query parameters for `GET /{network}/rate`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RateParams {
    /// Address of the token to sell.
    pub from_token_address: Option<String>,
    /// Address of the token to buy.
    pub to_token_address: Option<String>,
    /// Amount to sell in base units (string-encoded integer).
    pub amount: Option<String>,
}

impl RateParams {
    /// Validates presence and shape of every field.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingParameters`] listing all absent fields,
    /// or [`GatewayError::InvalidParameter`] for a malformed amount.
    pub fn into_request(self) -> Result<QuoteRequest, GatewayError> {
        let mut fields = RequiredFields::new();
        let from_token_address = fields.take("fromTokenAddress", self.from_token_address);
        let to_token_address = fields.take("toTokenAddress", self.to_token_address);
        let amount = fields.take("amount", self.amount);
        fields.finish()?;

        Ok(QuoteRequest {
            from_token_address,
            to_token_address,
            amount: parse_amount("amount", &amount)?,
        })
    }
}
