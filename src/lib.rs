//! CaseBank - Problem Bank Testcase Administration
//!
//! This library provides the administrative surface for managing test-case
//! files (input/output pairs) attached to the problems of a problem bank.
//! Test cases are stored on local disk, one directory per problem, and are
//! served and mutated through a small set of HTTP endpoints.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Storage**: Test-case file store
//! - **Repositories**: Problem bank lookups
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
