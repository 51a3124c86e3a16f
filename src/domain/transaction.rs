//! Ready-to-sign transaction payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::token::JsonObject;

/// Unsigned transaction produced by the aggregator.
///
/// Passed through to the caller without interpretation: every field the
/// aggregator sends (`to`, `data`, `value`, `gas`, `gasPrice`, and any
/// others) is forwarded with its original JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct TransactionPayload(JsonObject);

impl TransactionPayload {
    /// Contract to call, when present.
    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.field("to")
    }

    /// ABI-encoded calldata, when present.
    #[must_use]
    pub fn data(&self) -> Option<&str> {
        self.field("data")
    }

    /// Returns a string field by its aggregator name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(serde_json::Value::as_str)
    }

    /// Returns the raw payload.
    #[must_use]
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }
}

/// Token-spending approval transaction.
pub type ApprovalTx = TransactionPayload;

/// Swap transaction.
pub type SwapTx = TransactionPayload;
