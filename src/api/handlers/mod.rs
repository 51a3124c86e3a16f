//! REST endpoint handlers organized by resource.

pub mod approval;
pub mod quote;
pub mod swap;
pub mod system;
pub mod tokens;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(tokens::routes())
        .merge(quote::routes())
        .merge(approval::routes())
        .merge(swap::routes())
}
