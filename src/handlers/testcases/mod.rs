//! Test-case management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Testcase routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/add/{problem_id}", get(handler::add_testcase))
        .route("/add/{problem_id}/save", post(handler::save_testcase))
        .route("/{problem_id}", get(handler::list_testcases))
        .route("/{problem_id}/{case_no}", get(handler::view_testcase))
        .route("/{problem_id}/{case_no}/remove", get(handler::remove_testcase))
}
