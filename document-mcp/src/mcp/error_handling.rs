//! Mapping library errors onto MCP errors
//!
//! Tool calls and prompts report an unknown document as invalid parameters.
//! Resource reads report it as a missing resource. Anything else is internal.

use crate::error::DocumentMcpError;
use rmcp::Error as McpError;
use serde_json::json;

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a library error raised by a tool or prompt into an MCP error
    pub fn handle_error(error: DocumentMcpError, operation: &str) -> McpError {
        match error {
            DocumentMcpError::DocumentNotFound(id) => {
                tracing::warn!("MCP operation '{}' failed: document {} not found", operation, id);
                McpError::invalid_params(
                    format!("Doc with id {id} not found"),
                    Some(json!({ "doc_id": id.as_str() })),
                )
            }
            other => {
                tracing::error!("MCP operation '{}' failed: {}", operation, other);
                McpError::internal_error(other.to_string(), None)
            }
        }
    }

    /// Convert a library error raised while reading a resource into an MCP error
    pub fn handle_resource_error(error: DocumentMcpError, uri: &str) -> McpError {
        match error {
            DocumentMcpError::DocumentNotFound(id) => {
                tracing::warn!("Resource {} not found", uri);
                McpError::resource_not_found(
                    format!("Doc with id {id} not found"),
                    Some(json!({ "uri": uri, "doc_id": id.as_str() })),
                )
            }
            other => Self::handle_error(other, "read resource"),
        }
    }

    /// Error for tool or prompt arguments that fail to decode
    pub fn invalid_arguments(error: impl std::fmt::Display) -> McpError {
        McpError::invalid_params(format!("Invalid arguments: {error}"), None)
    }
}
