//! Shared parameter validation used by every endpoint.

use crate::domain::BaseUnitAmount;
use crate::error::GatewayError;

/// Collects required query parameters, remembering every absent one so a
/// single error can name them all.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameter value, or records `name` as missing when the
    /// value is absent or blank.
    pub fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        match optional(value) {
            Some(v) => v,
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Fails if any parameter was recorded as missing.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingParameters`] naming every missing field.
    pub fn finish(self) -> Result<(), GatewayError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(GatewayError::MissingParameters(self.missing))
        }
    }
}

/// Trims a parameter and treats blank values as absent.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a base-unit integer parameter.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidParameter`] if `value` is not a
/// non-negative decimal integer.
pub fn parse_amount(name: &'static str, value: &str) -> Result<BaseUnitAmount, GatewayError> {
    value
        .parse()
        .map_err(|e: crate::domain::ConversionError| GatewayError::InvalidParameter {
            name,
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_missing_field_in_order() {
        let mut fields = RequiredFields::new();
        let _ = fields.take("fromTokenAddress", None);
        let to = fields.take("toTokenAddress", Some("0xabc".to_string()));
        let _ = fields.take("amount", Some("   ".to_string()));
        assert_eq!(to, "0xabc");

        let Err(GatewayError::MissingParameters(missing)) = fields.finish() else {
            panic!("expected missing parameters");
        };
        assert_eq!(missing, vec!["fromTokenAddress", "amount"]);
    }

    #[test]
    fn all_present_passes() {
        let mut fields = RequiredFields::new();
        let v = fields.take("amount", Some(" 1000 ".to_string()));
        assert_eq!(v, "1000");
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn parse_amount_rejects_non_integers() {
        assert!(parse_amount("amount", "1000").is_ok());
        for bad in ["1.5", "-3", "1e18", "ten"] {
            assert!(
                matches!(
                    parse_amount("amount", bad),
                    Err(GatewayError::InvalidParameter { name: "amount", .. })
                ),
                "input {bad:?}"
            );
        }
    }
}
