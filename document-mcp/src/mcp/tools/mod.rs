//! MCP tool implementations
//!
//! Each tool lives in its own submodule with its description kept next to it.

pub mod documents;
