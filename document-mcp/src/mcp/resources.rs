//! Document resources
//!
//! Two addresses are served:
//! - `docs://documents` lists every identifier as a JSON array
//! - `docs://documents/{doc_id}` returns one document's content
//!
//! The `doc_id` path segment is taken verbatim, including any further slashes.

use super::error_handling::McpErrorHandler;
use crate::documents::{DocumentId, DocumentStore};
use rmcp::model::*;
use rmcp::Error as McpError;
use serde_json::json;

/// Address of the identifier listing
pub const DOCUMENTS_URI: &str = "docs://documents";

/// Template address of a single document
pub const DOCUMENT_URI_TEMPLATE: &str = "docs://documents/{doc_id}";

const DOCUMENT_URI_PREFIX: &str = "docs://documents/";

/// A parsed resource address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceAddress {
    /// `docs://documents`
    DocumentList,
    /// `docs://documents/{doc_id}`
    Document(DocumentId),
}

impl ResourceAddress {
    /// Parse a URI, returning `None` for anything outside the `docs://documents` tree
    pub fn parse(uri: &str) -> Option<Self> {
        if uri == DOCUMENTS_URI {
            return Some(Self::DocumentList);
        }
        match uri.strip_prefix(DOCUMENT_URI_PREFIX) {
            Some(doc_id) if !doc_id.is_empty() => Some(Self::Document(DocumentId::from(doc_id))),
            _ => None,
        }
    }

    /// The URI this address was parsed from
    pub fn uri(&self) -> String {
        match self {
            Self::DocumentList => DOCUMENTS_URI.to_string(),
            Self::Document(doc_id) => format!("{DOCUMENT_URI_PREFIX}{doc_id}"),
        }
    }
}

/// Fixed resources for `resources/list`
pub fn list_resources() -> Vec<Resource> {
    let mut raw = RawResource::new(DOCUMENTS_URI, "list_docs");
    raw.description = Some("Return a list of all document IDs".to_string());
    raw.mime_type = Some("application/json".to_string());
    vec![raw.no_annotation()]
}

/// Templated resources for `resources/templates/list`
pub fn list_resource_templates() -> Vec<ResourceTemplate> {
    vec![RawResourceTemplate {
        uri_template: DOCUMENT_URI_TEMPLATE.to_string(),
        name: "fetch_doc".to_string(),
        description: Some("Return the contents of a specific document".to_string()),
        mime_type: Some("text/plain".to_string()),
    }
    .no_annotation()]
}

/// Serve `resources/read` for a URI
pub async fn read_resource(
    store: &dyn DocumentStore,
    uri: &str,
) -> std::result::Result<ReadResourceResult, McpError> {
    tracing::debug!("Reading resource {}", uri);

    let address = ResourceAddress::parse(uri).ok_or_else(|| {
        tracing::warn!("Unknown resource requested: {}", uri);
        McpError::resource_not_found(
            format!("Resource not found: {uri}"),
            Some(json!({ "uri": uri })),
        )
    })?;

    match address {
        ResourceAddress::DocumentList => {
            let ids = store.list_ids().await;
            let text = serde_json::to_string(&ids)
                .map_err(|e| McpError::internal_error(format!("JSON error: {e}"), None))?;
            Ok(ReadResourceResult {
                contents: vec![ResourceContents::TextResourceContents {
                    uri: uri.to_string(),
                    mime_type: Some("application/json".to_string()),
                    text,
                }],
            })
        }
        ResourceAddress::Document(doc_id) => {
            let content = store
                .get(&doc_id)
                .await
                .map_err(|e| McpErrorHandler::handle_resource_error(e, uri))?;
            Ok(ReadResourceResult {
                contents: vec![ResourceContents::TextResourceContents {
                    uri: uri.to_string(),
                    mime_type: Some("text/plain".to_string()),
                    text: content,
                }],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::InMemoryDocumentStore;

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.as_str(),
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_addresses() {
        assert_eq!(
            ResourceAddress::parse("docs://documents"),
            Some(ResourceAddress::DocumentList)
        );
        assert_eq!(
            ResourceAddress::parse("docs://documents/plan.md"),
            Some(ResourceAddress::Document(DocumentId::from("plan.md")))
        );
        assert_eq!(
            ResourceAddress::parse("docs://documents/nested/id"),
            Some(ResourceAddress::Document(DocumentId::from("nested/id")))
        );
        assert_eq!(ResourceAddress::parse("docs://documents/"), None);
        assert_eq!(ResourceAddress::parse("file:///etc/passwd"), None);
    }

    #[test]
    fn test_uri_round_trip() {
        for uri in ["docs://documents", "docs://documents/spec.txt"] {
            assert_eq!(ResourceAddress::parse(uri).unwrap().uri(), uri);
        }
    }

    #[test]
    fn test_listed_addresses() {
        let resources = list_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, DOCUMENTS_URI);

        let templates = list_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, DOCUMENT_URI_TEMPLATE);
    }

    #[tokio::test]
    async fn test_read_document_list() {
        let store = InMemoryDocumentStore::seeded();
        let result = read_resource(&store, DOCUMENTS_URI).await.unwrap();
        let ids: Vec<String> = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(
            ids,
            vec![
                "deposition.md",
                "report.pdf",
                "financials.docx",
                "outlook.pdf",
                "plan.md",
                "spec.txt"
            ]
        );
    }

    #[tokio::test]
    async fn test_read_single_document() {
        let store = InMemoryDocumentStore::seeded();
        let result = read_resource(&store, "docs://documents/report.pdf")
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "The report details the state of a 20m condenser tower."
        );
    }

    #[tokio::test]
    async fn test_read_missing_document() {
        let store = InMemoryDocumentStore::seeded();
        let error = read_resource(&store, "docs://documents/missing.pdf")
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(error.message, "Doc with id missing.pdf not found");
    }

    #[tokio::test]
    async fn test_read_unknown_uri() {
        let store = InMemoryDocumentStore::seeded();
        let error = read_resource(&store, "docs://elsewhere").await.unwrap_err();
        assert_eq!(error.code, ErrorCode::RESOURCE_NOT_FOUND);
    }
}
