//! Exact conversion between on-chain base units and display amounts.
//!
//! [`BaseUnitAmount`] is the integer amount the chain and the aggregator
//! work in (wei for ether-like tokens). [`DisplayAmount`] is a decimal value
//! scaled by a token's `decimals`. Both are backed by a 256-bit unsigned
//! integer, so no conversion ever passes through floating point.
//!
//! All amounts are serialized as JSON strings.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Serialize, Serializer};

/// Fractional digits kept by [`to_display`].
pub const DISPLAY_SCALE: u8 = 2;

/// Failure to interpret or rescale an amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The amount string was empty.
    #[error("amount is empty")]
    Empty,

    /// The amount carried a minus sign.
    #[error("amount must not be negative: {0}")]
    Negative(String),

    /// The amount contained something other than decimal digits.
    #[error("amount is not a decimal number: {0}")]
    InvalidDigit(String),

    /// The amount does not fit in 256 bits after scaling.
    #[error("amount out of range: {0}")]
    Overflow(String),

    /// Shifting the amount would drop non-zero fractional digits.
    #[error("amount {amount} is not representable with {decimals} decimals")]
    Inexact {
        /// Offending amount as supplied.
        amount: String,
        /// Target decimal exponent.
        decimals: u8,
    },
}

/// Non-negative integer amount in a token's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BaseUnitAmount(U256);

impl BaseUnitAmount {
    /// Zero base units.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wraps a raw [`U256`].
    #[must_use]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Returns the inner [`U256`].
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Rescales to a display amount with [`DISPLAY_SCALE`] fractional
    /// digits, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Overflow`] if `decimals < 2` and the
    /// upscaled amount exceeds 256 bits.
    pub fn to_display(&self, decimals: u8) -> Result<DisplayAmount, ConversionError> {
        let digits = if decimals >= DISPLAY_SCALE {
            // 10^78 exceeds U256::MAX, so any larger shift truncates to zero.
            match pow10(decimals - DISPLAY_SCALE) {
                Some(divisor) => self.0 / divisor,
                None => U256::ZERO,
            }
        } else {
            pow10(DISPLAY_SCALE - decimals)
                .and_then(|factor| self.0.checked_mul(factor))
                .ok_or_else(|| ConversionError::Overflow(self.to_string()))?
        };
        Ok(DisplayAmount {
            digits,
            scale: DISPLAY_SCALE,
        })
    }
}

impl FromStr for BaseUnitAmount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_sign(s)?;
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::InvalidDigit(s.to_string()));
        }
        parse_digits(s, s).map(Self)
    }
}

impl fmt::Display for BaseUnitAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for BaseUnitAmount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl Serialize for BaseUnitAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Human-scale decimal amount: `digits / 10^scale`.
///
/// Formats with exactly `scale` fractional digits, so an amount produced
/// by [`to_display`] always prints like `"454.44"` or `"0.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayAmount {
    digits: U256,
    scale: u8,
}

impl DisplayAmount {
    /// Number of fractional digits carried.
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Shifts the decimal point right by `decimals` places.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Inexact`] when the amount has non-zero
    /// digits beyond `decimals` places, and [`ConversionError::Overflow`]
    /// when the result exceeds 256 bits.
    pub fn to_base_units(&self, decimals: u8) -> Result<BaseUnitAmount, ConversionError> {
        if self.scale <= decimals {
            return pow10(decimals - self.scale)
                .and_then(|factor| self.digits.checked_mul(factor))
                .map(BaseUnitAmount)
                .ok_or_else(|| ConversionError::Overflow(self.to_string()));
        }
        let Some(divisor) = pow10(self.scale - decimals) else {
            return Err(ConversionError::Overflow(self.to_string()));
        };
        if !(self.digits % divisor).is_zero() {
            return Err(ConversionError::Inexact {
                amount: self.to_string(),
                decimals,
            });
        }
        Ok(BaseUnitAmount(self.digits / divisor))
    }
}

impl FromStr for DisplayAmount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_sign(s)?;
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        let well_formed = !(int_part.is_empty() && frac_part.is_empty())
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(ConversionError::InvalidDigit(s.to_string()));
        }
        let scale =
            u8::try_from(frac_part.len()).map_err(|_| ConversionError::Overflow(s.to_string()))?;
        // Both halves are plain digit runs, so concatenating them yields
        // the unscaled integer.
        let joined = format!("{int_part}{frac_part}");
        let digits = parse_digits(&joined, s)?;
        if pow10(scale).is_none() {
            return Err(ConversionError::Overflow(s.to_string()));
        }
        Ok(Self { digits, scale })
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `scale` is validated on construction, so the power always fits.
        let Some(unit) = pow10(self.scale) else {
            return Err(fmt::Error);
        };
        let whole = self.digits / unit;
        if self.scale == 0 {
            return write!(f, "{whole}");
        }
        let frac = (self.digits % unit).to_string();
        write!(f, "{whole}.{frac:0>width$}", width = usize::from(self.scale))
    }
}

impl Serialize for DisplayAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Converts a base-unit amount string to a display amount with two
/// fractional digits, truncating (never rounding up).
///
/// # Errors
///
/// Returns [`ConversionError`] if `amount` is empty, negative, not a
/// decimal integer, or out of 256-bit range.
pub fn to_display(amount: &str, decimals: u8) -> Result<DisplayAmount, ConversionError> {
    amount.parse::<BaseUnitAmount>()?.to_display(decimals)
}

/// Converts a display amount string back to base units.
///
/// # Errors
///
/// Returns [`ConversionError`] if `amount` is not a well-formed
/// non-negative decimal or cannot be shifted exactly.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<BaseUnitAmount, ConversionError> {
    amount.parse::<DisplayAmount>()?.to_base_units(decimals)
}

fn check_sign(s: &str) -> Result<(), ConversionError> {
    if s.is_empty() {
        return Err(ConversionError::Empty);
    }
    if s.starts_with('-') {
        return Err(ConversionError::Negative(s.to_string()));
    }
    Ok(())
}

/// Parses a string of ASCII digits; `original` is reported on failure.
fn parse_digits(digits: &str, original: &str) -> Result<U256, ConversionError> {
    U256::from_str_radix(digits, 10).map_err(|_| ConversionError::Overflow(original.to_string()))
}

/// `10^exp`, or `None` once it no longer fits in 256 bits.
fn pow10(exp: u8) -> Option<U256> {
    let ten = U256::from(10u8);
    (0..exp).try_fold(U256::from(1u8), |acc, _| acc.checked_mul(ten))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn display(amount: &str, decimals: u8) -> String {
        match to_display(amount, decimals) {
            Ok(d) => d.to_string(),
            Err(e) => panic!("to_display({amount}, {decimals}) failed: {e}"),
        }
    }

    fn base(amount: &str, decimals: u8) -> String {
        match to_base_units(amount, decimals) {
            Ok(b) => b.to_string(),
            Err(e) => panic!("to_base_units({amount}, {decimals}) failed: {e}"),
        }
    }

    #[test]
    fn to_display_shifts_by_token_decimals() {
        assert_eq!(display("454442892848259448028", 18), "454.44");
        assert_eq!(display("1000000", 6), "1.00");
        assert_eq!(display("123456789", 6), "123.45");
    }

    #[test]
    fn to_display_truncates_instead_of_rounding() {
        assert_eq!(display("454449999999999999999", 18), "454.44");
        assert_eq!(display("9999999999999999", 18), "0.00");
        assert_eq!(display("19999", 4), "1.99");
    }

    #[test]
    fn to_display_small_amounts() {
        assert_eq!(display("0", 18), "0.00");
        assert_eq!(display("1", 18), "0.00");
        assert_eq!(display("10000000000000000", 18), "0.01");
    }

    #[test]
    fn to_display_low_decimals_upscale() {
        assert_eq!(display("42", 0), "42.00");
        assert_eq!(display("42", 1), "4.20");
        assert_eq!(display("42", 2), "0.42");
    }

    #[test]
    fn to_display_is_exact_beyond_u128() {
        assert_eq!(display("1000000000000000000000000000000", 18), "1000000000000.00");
        assert_eq!(
            display("1234567890123456789012345678901234", 6),
            "1234567890123456789012345678.90"
        );
    }

    #[test]
    fn to_display_huge_decimals_is_zero() {
        assert_eq!(display("123456789", 100), "0.00");
        assert_eq!(display("123456789", 255), "0.00");
    }

    #[test]
    fn to_display_rejects_malformed_amounts() {
        assert_eq!(to_display("", 18), Err(ConversionError::Empty));
        assert_eq!(
            to_display("-5", 18),
            Err(ConversionError::Negative("-5".to_string()))
        );
        assert_eq!(
            to_display("abc", 18),
            Err(ConversionError::InvalidDigit("abc".to_string()))
        );
        assert!(matches!(
            to_display("1.5", 18),
            Err(ConversionError::InvalidDigit(_))
        ));
        assert!(matches!(
            to_display("0x10", 18),
            Err(ConversionError::InvalidDigit(_))
        ));
        assert!(matches!(
            to_display(" 1", 18),
            Err(ConversionError::InvalidDigit(_))
        ));
    }

    #[test]
    fn to_display_overflow_is_reported() {
        let max = U256::MAX.to_string();
        assert!(matches!(
            to_display(&max, 0),
            Err(ConversionError::Overflow(_))
        ));
        let too_big = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(
            to_display(too_big, 18),
            Err(ConversionError::Overflow(_))
        ));
    }

    #[test]
    fn to_base_units_shifts_right() {
        assert_eq!(base("454.44", 18), "454440000000000000000");
        assert_eq!(base("1.5", 6), "1500000");
        assert_eq!(base("7", 0), "7");
        assert_eq!(base("1.50", 1), "15");
        assert_eq!(base(".5", 1), "5");
    }

    #[test]
    fn to_base_units_rejects_inexact_shift() {
        assert_eq!(
            to_base_units("1.5", 0),
            Err(ConversionError::Inexact {
                amount: "1.5".to_string(),
                decimals: 0,
            })
        );
    }

    #[test]
    fn to_base_units_rejects_malformed() {
        assert_eq!(to_base_units("", 6), Err(ConversionError::Empty));
        assert!(matches!(
            to_base_units("-1.0", 6),
            Err(ConversionError::Negative(_))
        ));
        for bad in [".", "1.2.3", "1,5", "1e18", "abc"] {
            assert!(
                matches!(to_base_units(bad, 6), Err(ConversionError::InvalidDigit(_))),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn display_then_base_recovers_amounts_exact_at_two_digits() {
        for (amount, decimals) in [
            ("454440000000000000000", 18),
            ("1200", 2),
            ("5", 0),
            ("100", 1),
            ("1000000000000000000000000000000", 18),
        ] {
            let Ok(shown) = to_display(amount, decimals) else {
                panic!("to_display failed for {amount}");
            };
            let Ok(back) = shown.to_base_units(decimals) else {
                panic!("to_base_units failed for {shown}");
            };
            assert_eq!(back.to_string(), amount, "decimals {decimals}");
        }
    }

    #[test]
    fn amounts_serialize_as_strings() {
        let Ok(shown) = to_display("454442892848259448028", 18) else {
            panic!("conversion failed");
        };
        let json = serde_json::to_string(&shown).ok();
        assert_eq!(json.as_deref(), Some("\"454.44\""));

        let json = serde_json::to_string(&BaseUnitAmount::from(1_000_000u128)).ok();
        assert_eq!(json.as_deref(), Some("\"1000000\""));
    }

    #[test]
    fn display_amount_parse_keeps_scale() {
        let Ok(parsed) = "12.3400".parse::<DisplayAmount>() else {
            panic!("parse failed");
        };
        assert_eq!(parsed.scale(), 4);
        assert_eq!(parsed.to_string(), "12.3400");
    }
}
