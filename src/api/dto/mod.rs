//! Data Transfer Objects for REST request deserialization.
//!
//! Every query parameter is optional at the extractor level so that a
//! missing field surfaces as a structured validation error instead of an
//! extractor rejection.

pub mod common_dto;
pub mod quote_dto;
pub mod swap_dto;

pub use common_dto::*;
pub use quote_dto::*;
pub use swap_dto::*;
