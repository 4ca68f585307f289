//! Business logic services

pub mod testcase_service;

pub use testcase_service::TestcaseService;
