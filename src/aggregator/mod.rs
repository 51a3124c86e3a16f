//! Client for the external DEX aggregator.
//!
//! The aggregator computes routes and prices; this module only issues the
//! four read-style calls the gateway needs and parses their bodies. No
//! retries and no caching: every call reflects the aggregator's live state.

pub mod client;
pub mod error;
pub mod models;

pub use client::AggregatorClient;
pub use error::UpstreamError;
pub use models::{ApprovalRequest, QuoteRequest, RawQuote, SwapRequest};

/// Aggregator base URL used when none is configured.
pub const DEFAULT_AGGREGATOR_URL: &str = "https://api.1inch.io/v4.0";

/// Integrator fee, in percent, attached to every swap.
pub const INTEGRATOR_FEE_PERCENT: &str = "0.25";

/// Slippage tolerance, in percent, when the caller gives none.
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 1.0;

/// Largest slippage tolerance the aggregator accepts, in percent.
pub const MAX_SLIPPAGE_PERCENT: f64 = 50.0;
