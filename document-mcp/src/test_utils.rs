/// Test utilities for document-mcp tests
///
/// Builds servers over a freshly seeded store so every test starts from the
/// same six documents, and pulls text out of MCP results.
///
/// ```no_run
/// use document_mcp::test_utils::{arguments, create_test_server, tool_text};
///
/// # async fn demo() {
/// let server = create_test_server();
/// let result = server
///     .invoke_tool("read_doc_contents", arguments(&[("doc_id", "plan.md")]))
///     .await
///     .unwrap();
/// assert!(tool_text(&result).contains("plan"));
/// # }
/// ```
use crate::documents::InMemoryDocumentStore;
use crate::mcp::McpServer;
use rmcp::model::{
    CallToolResult, GetPromptResult, PromptMessageContent, RawContent, ReadResourceResult,
    ResourceContents,
};
use std::sync::Arc;

/// Create a server over the built-in seed documents
pub fn create_test_server() -> McpServer {
    McpServer::new(Arc::new(InMemoryDocumentStore::seeded()))
}

/// Build a JSON argument map from string pairs
pub fn arguments(pairs: &[(&str, &str)]) -> serde_json::Map<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

/// Text of the first content item of a tool result
pub fn tool_text(result: &CallToolResult) -> String {
    match result.content.first().map(|content| &content.raw) {
        Some(RawContent::Text(text)) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}

/// Text of the first message of a rendered prompt
pub fn prompt_text(result: &GetPromptResult) -> String {
    match result.messages.first().map(|message| &message.content) {
        Some(PromptMessageContent::Text { text }) => text.clone(),
        other => panic!("expected text prompt message, got {other:?}"),
    }
}

/// Text and MIME type of the first item of a resource read
pub fn resource_text(result: &ReadResourceResult) -> (String, Option<String>) {
    match result.contents.first() {
        Some(ResourceContents::TextResourceContents {
            text, mime_type, ..
        }) => (text.clone(), mime_type.clone()),
        other => panic!("expected text resource contents, got {other:?}"),
    }
}
