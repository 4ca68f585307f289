//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Authentication for the administrative routes is provided by the
//! deployment in front of this service.

pub mod health;
pub mod testcases;

use axum::Router;

use crate::state::AppState;

/// Create all administrative routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/testcases", testcases::routes())
}
