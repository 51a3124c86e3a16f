//! Approval and swap DTOs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;

use super::common_dto::{RequiredFields, optional, parse_amount};
use crate::aggregator::{
    ApprovalRequest, DEFAULT_SLIPPAGE_PERCENT, MAX_SLIPPAGE_PERCENT, SwapRequest,
};
use crate::error::GatewayError;

/// Query parameters for `GET /{network}/approve`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ApprovalParams {
    /// Token to approve for spending by the aggregator router.
    pub token_address: Option<String>,
    /// Allowance in base units (string-encoded integer).
    pub amount: Option<String>,
}

impl ApprovalParams {
    /// Validates presence and shape of every field.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingParameters`] listing all absent fields,
    /// or [`GatewayError::InvalidParameter`] for a malformed amount.
    pub fn into_request(self) -> Result<ApprovalRequest, GatewayError> {
        let mut fields = RequiredFields::new();
        let token_address = fields.take("tokenAddress", self.token_address);
        let amount = fields.take("amount", self.amount);
        fields.finish()?;

        Ok(ApprovalRequest {
            token_address,
            amount: parse_amount("amount", &amount)?,
        })
    }
}

/// Query parameters for `GET /{network}/swap`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SwapParams {
    /// Wallet that will sign and send the swap.
    pub wallet_address: Option<String>,
    /// Address of the token to sell.
    pub from_token_address: Option<String>,
    /// Address of the token to buy.
    pub to_token_address: Option<String>,
    /// Amount to sell in base units (string-encoded integer).
    pub amount_trade: Option<String>,
    /// Slippage tolerance in percent, 0 to 50. Defaults to 1.
    pub slippage: Option<String>,
    /// Gas limit override.
    pub gas_limit: Option<String>,
    /// Gas price override in wei.
    pub gas_price: Option<String>,
}

impl SwapParams {
    /// Validates presence and shape of every field and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingParameters`] listing all absent
    /// required fields, or [`GatewayError::InvalidParameter`] for a
    /// malformed amount, slippage, or gas override.
    pub fn into_request(self) -> Result<SwapRequest, GatewayError> {
        let mut fields = RequiredFields::new();
        let from_address = fields.take("walletAddress", self.wallet_address);
        let from_token_address = fields.take("fromTokenAddress", self.from_token_address);
        let to_token_address = fields.take("toTokenAddress", self.to_token_address);
        let amount = fields.take("amountTrade", self.amount_trade);
        fields.finish()?;

        Ok(SwapRequest {
            from_address,
            from_token_address,
            to_token_address,
            amount: parse_amount("amountTrade", &amount)?,
            slippage_percent: parse_slippage(self.slippage)?,
            gas_limit: parse_optional("gasLimit", self.gas_limit)?,
            gas_price: parse_optional("gasPrice", self.gas_price)?,
        })
    }
}

fn parse_slippage(value: Option<String>) -> Result<f64, GatewayError> {
    let Some(raw) = optional(value) else {
        return Ok(DEFAULT_SLIPPAGE_PERCENT);
    };
    let invalid = || GatewayError::InvalidParameter {
        name: "slippage",
        reason: format!("expected a percentage between 0 and {MAX_SLIPPAGE_PERCENT}, got {raw}"),
    };
    let slippage: f64 = raw.parse().map_err(|_| invalid())?;
    if !slippage.is_finite() || !(0.0..=MAX_SLIPPAGE_PERCENT).contains(&slippage) {
        return Err(invalid());
    }
    Ok(slippage)
}

fn parse_optional<T>(name: &'static str, value: Option<String>) -> Result<Option<T>, GatewayError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    optional(value)
        .map(|v| {
            if !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GatewayError::InvalidParameter {
                    name,
                    reason: format!("expected a decimal integer, got {v}"),
                });
            }
            v.parse().map_err(|e: T::Err| GatewayError::InvalidParameter {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    fn swap_params() -> SwapParams {
        SwapParams {
            wallet_address: Some("0x9ecdc9af2a8254dde8bbce8778efae695044cc9f".to_string()),
            from_token_address: Some("0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".to_string()),
            to_token_address: Some("0x55d398326f99059ff775485246999027b3197955".to_string()),
            amount_trade: Some("1000000000000000000".to_string()),
            ..SwapParams::default()
        }
    }

    #[test]
    fn approval_requires_token_and_amount() {
        let Err(err) = ApprovalParams::default().into_request() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            err.to_string(),
            "missing required parameters: tokenAddress, amount"
        );
    }

    #[test]
    fn swap_defaults_slippage_and_leaves_gas_unset() {
        let Ok(request) = swap_params().into_request() else {
            panic!("params should validate");
        };
        assert!((request.slippage_percent - 1.0).abs() < f64::EPSILON);
        assert_eq!(request.gas_limit, None);
        assert_eq!(request.gas_price, None);
    }

    #[test]
    fn swap_blank_optionals_count_as_absent() {
        let params = SwapParams {
            slippage: Some(String::new()),
            gas_limit: Some(String::new()),
            gas_price: Some(" ".to_string()),
            ..swap_params()
        };
        let Ok(request) = params.into_request() else {
            panic!("params should validate");
        };
        assert!((request.slippage_percent - 1.0).abs() < f64::EPSILON);
        assert_eq!(request.gas_limit, None);
        assert_eq!(request.gas_price, None);
    }

    #[test]
    fn swap_explicit_overrides_are_parsed() {
        let params = SwapParams {
            slippage: Some("0.5".to_string()),
            gas_limit: Some("250000".to_string()),
            gas_price: Some("5000000000".to_string()),
            ..swap_params()
        };
        let Ok(request) = params.into_request() else {
            panic!("params should validate");
        };
        assert!((request.slippage_percent - 0.5).abs() < f64::EPSILON);
        assert_eq!(request.gas_limit, Some(250_000));
        assert_eq!(request.gas_price, Some(U256::from(5_000_000_000_u64)));
    }

    #[test]
    fn swap_rejects_malformed_gas_overrides() {
        for (gas_limit, gas_price, field) in [
            ("-1", "1", "gasLimit"),
            ("18446744073709551616", "1", "gasLimit"),
            ("21000", "0x10", "gasPrice"),
            ("21000", "1.5", "gasPrice"),
        ] {
            let params = SwapParams {
                gas_limit: Some(gas_limit.to_string()),
                gas_price: Some(gas_price.to_string()),
                ..swap_params()
            };
            let Err(GatewayError::InvalidParameter { name, .. }) = params.into_request() else {
                panic!("expected invalid {field}");
            };
            assert_eq!(name, field);
        }
    }

    #[test]
    fn swap_rejects_out_of_range_slippage() {
        for bad in ["-1", "50.5", "NaN", "inf", "one"] {
            let params = SwapParams {
                slippage: Some(bad.to_string()),
                ..swap_params()
            };
            assert!(
                matches!(
                    params.into_request(),
                    Err(GatewayError::InvalidParameter { name: "slippage", .. })
                ),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn swap_names_all_missing_fields() {
        let Err(err) = SwapParams::default().into_request() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            err.to_string(),
            "missing required parameters: walletAddress, fromTokenAddress, toTokenAddress, amountTrade"
        );
    }
}
