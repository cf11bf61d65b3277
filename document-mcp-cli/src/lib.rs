//! document-mcp CLI library
//!
//! Command-line definitions, logging setup and exit codes for the
//! `document-mcp` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Document and prompt commands
pub mod commands;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tracing subscriber setup
pub mod logging;
