//! Response creation utilities for MCP operations

use rmcp::model::*;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: impl Into<String>) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: message.into(),
            }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Confirmation returned by the `edit_document` tool
pub fn edit_confirmation(doc_id: &str) -> String {
    format!("Successfully updated document {doc_id}")
}

/// Extract the text of the first content item of a tool result
pub fn response_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}
