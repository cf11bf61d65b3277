//! Document edit tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::EditDocumentRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for editing a document by exact string replacement
#[derive(Default)]
pub struct EditDocumentTool;

impl EditDocumentTool {
    /// Creates a new instance of the EditDocumentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for EditDocumentTool {
    fn name(&self) -> &'static str {
        "edit_document"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<EditDocumentRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: EditDocumentRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_edit_document(request).await
    }
}
