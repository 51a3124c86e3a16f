//! # dex-gateway
//!
//! REST gateway for discovering swappable tokens, quoting exchanges and
//! building ready-to-sign approval and swap transactions on EVM networks.
//!
//! Routing and pricing are delegated to an external DEX aggregator. This
//! service resolves networks to chain ids, validates inputs, and converts
//! base-unit amounts to display amounts with exact integer arithmetic.
//! It never signs, broadcasts, or stores anything.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + DTO validation (api/)
//!     │
//!     ├── SwapService (service/)
//!     │
//!     ├── Network resolution, amount conversion (domain/)
//!     │
//!     └── AggregatorClient (aggregator/) ──► DEX aggregator API
//! ```

pub mod aggregator;
pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
