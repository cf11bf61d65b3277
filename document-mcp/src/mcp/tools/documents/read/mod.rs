//! Document read tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ReadDocContentsRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for reading a document's contents by identifier
#[derive(Default)]
pub struct ReadDocContentsTool;

impl ReadDocContentsTool {
    /// Creates a new instance of the ReadDocContentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ReadDocContentsTool {
    fn name(&self) -> &'static str {
        "read_doc_contents"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<ReadDocContentsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ReadDocContentsRequest = BaseToolImpl::parse_arguments(arguments)?;
        context
            .tool_handlers
            .handle_read_doc_contents(request)
            .await
    }
}
