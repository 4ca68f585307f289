//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::repositories::ProblemBank, storage::TestcaseStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Problem bank lookups
    pub bank: Arc<dyn ProblemBank>,

    /// Test-case file store
    pub store: TestcaseStore,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(bank: Arc<dyn ProblemBank>, store: TestcaseStore, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                bank,
                store,
                config,
            }),
        }
    }

    /// Get a reference to the problem bank
    pub fn bank(&self) -> &dyn ProblemBank {
        self.inner.bank.as_ref()
    }

    /// Get a reference to the test-case store
    pub fn store(&self) -> &TestcaseStore {
        &self.inner.store
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
