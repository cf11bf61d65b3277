//! Document tools for MCP operations
//!
//! ## Tools
//!
//! - **read**: `read_doc_contents` returns a document's raw text
//! - **edit**: `edit_document` replaces every occurrence of a string in a document
//!
//! Both fail with "Doc with id {doc_id} not found" for unknown identifiers.
//! Request types live in `crate::mcp::types` and the business logic in
//! `crate::mcp::tool_handlers`.

pub mod edit;
pub mod read;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all document tools with the registry
pub fn register_document_tools(registry: &mut ToolRegistry) {
    registry.register(read::ReadDocContentsTool::new());
    registry.register(edit::EditDocumentTool::new());
}
