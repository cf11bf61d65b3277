//! Tool handlers for MCP operations

use super::error_handling::McpErrorHandler;
use super::responses::{create_success_response, edit_confirmation};
use super::types::{EditDocumentRequest, ReadDocContentsRequest};
use crate::documents::{DocumentId, DocumentStore};
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use std::sync::Arc;

/// Tool handlers for MCP server operations
#[derive(Clone)]
pub struct ToolHandlers {
    store: Arc<dyn DocumentStore>,
}

impl ToolHandlers {
    /// Create a new tool handlers instance over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Handle the `read_doc_contents` tool operation.
    ///
    /// Returns the raw content of the document as the single text item.
    pub async fn handle_read_doc_contents(
        &self,
        request: ReadDocContentsRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Reading document {}", request.doc_id);

        let doc_id = DocumentId::from(request.doc_id);
        match self.store.get(&doc_id).await {
            Ok(content) => Ok(create_success_response(content)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "read document")),
        }
    }

    /// Handle the `edit_document` tool operation.
    ///
    /// Replaces every occurrence of `old_str` with `new_str`. A target that
    /// does not occur still succeeds and leaves the document untouched.
    pub async fn handle_edit_document(
        &self,
        request: EditDocumentRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Editing document {}", request.doc_id);

        let doc_id = DocumentId::from(request.doc_id);
        match self
            .store
            .replace(&doc_id, &request.old_str, &request.new_str)
            .await
        {
            Ok(_) => {
                tracing::info!("Updated document {}", doc_id);
                Ok(create_success_response(edit_confirmation(doc_id.as_str())))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "edit document")),
        }
    }
}
