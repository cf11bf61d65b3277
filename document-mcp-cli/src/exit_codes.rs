//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: Runtime failure, such as an unknown document
//! - 2: Configuration errors

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Runtime failure
pub const EXIT_FAILURE: i32 = 1;

/// Configuration could not be loaded or validated
pub const EXIT_CONFIG_ERROR: i32 = 2;
