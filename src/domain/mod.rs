//! Domain layer: chain resolution, exact amount arithmetic, and the value
//! objects exchanged with clients.
//!
//! Everything here is request-scoped and immutable; nothing is cached
//! between requests.

pub mod amount;
pub mod network;
pub mod quote;
pub mod token;
pub mod transaction;

pub use amount::{BaseUnitAmount, ConversionError, DisplayAmount, to_base_units, to_display};
pub use network::{ChainId, Network, resolve_chain};
pub use quote::{QuoteResult, RouteLeg};
pub use token::{JsonObject, Token, TokenList};
pub use transaction::{ApprovalTx, SwapTx, TransactionPayload};
