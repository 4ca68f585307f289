//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod problem_repo;

pub use problem_repo::{PgProblemBank, ProblemBank};
