//! Test-case file storage
//!
//! All filesystem access for test-case pairs lives here.

pub mod testcase_store;

pub use testcase_store::TestcaseStore;
