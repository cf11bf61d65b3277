//! Request types for document MCP tools
//!
//! Field doc comments become the parameter descriptions in each tool's schema.

use serde::{Deserialize, Serialize};

/// Request to read a document
///
/// # Examples
///
/// ```ignore
/// ReadDocContentsRequest {
///     doc_id: "plan.md".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ReadDocContentsRequest {
    /// Id of the document to read
    pub doc_id: String,
}

/// Request to edit a document by exact string replacement
///
/// # Examples
///
/// ```ignore
/// EditDocumentRequest {
///     doc_id: "plan.md".to_string(),
///     old_str: "steps".to_string(),
///     new_str: "phases".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct EditDocumentRequest {
    /// Id of the document that will be edited
    pub doc_id: String,
    /// The text to replace. Must match exactly, including whitespace.
    pub old_str: String,
    /// The new text to insert in place of the old text.
    pub new_str: String,
}

/// Arguments of the `format_markdown` and `summarize` prompts
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DocumentPromptRequest {
    /// Id of the document to embed in the prompt
    pub doc_id: String,
}
