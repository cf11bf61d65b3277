//! Model Context Protocol (MCP) server support
//!
//! This module adapts the document store to the MCP runtime: two tools, two
//! resource addresses and two prompts, all served by [`McpServer`].

// Module declarations
pub mod error_handling;
pub mod resources;
pub mod responses;
pub mod server;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items from submodules
pub use resources::{ResourceAddress, DOCUMENTS_URI, DOCUMENT_URI_TEMPLATE};
pub use server::McpServer;
pub use tool_handlers::ToolHandlers;
pub use tool_registry::{register_document_tools, McpTool, ToolContext, ToolRegistry};
pub use types::{DocumentPromptRequest, EditDocumentRequest, ReadDocContentsRequest};
