//! Service layer: business logic orchestration.
//!
//! [`SwapService`] resolves networks, delegates routing and pricing to the
//! aggregator, and rescales quote amounts for display.

pub mod swap_service;

pub use swap_service::SwapService;
