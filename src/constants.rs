//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// STORAGE
// =============================================================================

/// Default root directory for test-case files
pub const DEFAULT_TESTCASES_PATH: &str = "data/testcases";

/// Filename prefix for test-case input files
pub const INPUT_FILE_PREFIX: &str = "input";

/// Filename prefix for test-case output files
pub const OUTPUT_FILE_PREFIX: &str = "output";

// =============================================================================
// ROUTING
// =============================================================================

/// Base path the administrative routes are nested under
pub const ADMIN_BASE_PATH: &str = "/admin";

/// Highest case index addressable for viewing or removal (single digit,
/// matching the admin routing pattern)
pub const MAX_CASE_NO: usize = 9;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum test-case input size in bytes (10 MB)
pub const MAX_TESTCASE_INPUT_LENGTH: u64 = 10 * 1024 * 1024;

/// Maximum test-case output size in bytes (10 MB)
pub const MAX_TESTCASE_OUTPUT_LENGTH: u64 = 10 * 1024 * 1024;
