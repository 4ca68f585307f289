//! Problem repository
//!
//! The problem bank itself is owned by the surrounding system; this service
//! only reads it. The `ProblemBank` trait is the seam that lets the service
//! layer and tests run against something other than Postgres.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::Problem};

/// Read-only access to the problems of the bank
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProblemBank: Send + Sync {
    /// List every known problem
    async fn list(&self) -> AppResult<Vec<Problem>>;

    /// Find a problem by its numeric identifier
    async fn find(&self, problem_id: i64) -> AppResult<Option<Problem>>;
}

/// Postgres-backed problem bank
pub struct PgProblemBank {
    pool: PgPool,
}

impl PgProblemBank {
    /// Create a new problem bank over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemBank for PgProblemBank {
    async fn list(&self) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT problem_id, title, statement, uploaded_by, created_at
            FROM problems
            ORDER BY problem_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(problems)
    }

    async fn find(&self, problem_id: i64) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            SELECT problem_id, title, statement, uploaded_by, created_at
            FROM problems
            WHERE problem_id = $1
            "#,
        )
        .bind(problem_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(problem)
    }
}
