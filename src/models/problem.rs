//! Problem model
//!
//! Problems are owned by the surrounding bank system; this service only
//! references them by their numeric identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: i64,
    pub title: String,
    pub statement: String,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Get a preview of the statement (truncated)
    ///
    /// Cuts at the last character boundary at or below `max_len` bytes, so a
    /// multibyte statement never splits mid-character.
    pub fn statement_preview(&self, max_len: usize) -> String {
        if self.statement.len() <= max_len {
            self.statement.clone()
        } else {
            let mut cut = max_len;
            while !self.statement.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &self.statement[..cut])
        }
    }
}
