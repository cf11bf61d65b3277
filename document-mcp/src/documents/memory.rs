//! In-memory document store
//!
//! All documents live behind one `RwLock`. Reads share the lock and edits take
//! it exclusively, so a read that starts after an edit returns sees the edit.

use super::{replace_all, Document, DocumentId, DocumentSeed, DocumentStore};
use crate::error::{DocumentMcpError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct DocumentTable {
    order: Vec<DocumentId>,
    contents: HashMap<DocumentId, String>,
}

impl DocumentTable {
    fn exists(&self, id: &DocumentId) -> bool {
        self.contents.contains_key(id)
    }

    /// Every read and edit checks the identifier here first
    fn require(&self, id: &DocumentId) -> Result<()> {
        if self.exists(id) {
            Ok(())
        } else {
            tracing::debug!("Document {} not found", id);
            Err(DocumentMcpError::DocumentNotFound(id.clone()))
        }
    }

    /// Returns false if the identifier was already present
    fn insert(&mut self, document: Document) -> bool {
        if self.exists(&document.id) {
            return false;
        }
        self.order.push(document.id.clone());
        self.contents.insert(document.id, document.content);
        true
    }
}

/// Document store kept entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    table: RwLock<DocumentTable>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the six built-in documents
    pub fn seeded() -> Self {
        let mut table = DocumentTable::default();
        for document in DocumentSeed::builtin().into_documents() {
            table.insert(document);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Create a store from a seed, rejecting duplicate identifiers
    pub fn from_seed(seed: DocumentSeed) -> Result<Self> {
        let mut table = DocumentTable::default();
        for document in seed.into_documents() {
            let id = document.id.clone();
            if !table.insert(document) {
                return Err(DocumentMcpError::DuplicateDocument(id));
            }
        }
        tracing::debug!("Seeded document store with {} documents", table.order.len());
        Ok(Self {
            table: RwLock::new(table),
        })
    }

    /// Number of documents in the store
    pub async fn len(&self) -> usize {
        self.table.read().await.order.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.order.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, id: &DocumentId) -> Result<String> {
        let table = self.table.read().await;
        table.require(id)?;
        Ok(table.contents.get(id).cloned().unwrap_or_default())
    }

    async fn list_ids(&self) -> Vec<DocumentId> {
        self.table.read().await.order.clone()
    }

    async fn replace(&self, id: &DocumentId, old: &str, new: &str) -> Result<String> {
        let mut table = self.table.write().await;
        table.require(id)?;
        let content = table.contents.entry(id.clone()).or_default();

        let updated = replace_all(content, old, new);
        if updated == *content {
            tracing::debug!("Edit of {} matched nothing, content unchanged", id);
        } else {
            *content = updated;
        }
        Ok(content.clone())
    }

    async fn exists(&self, id: &DocumentId) -> bool {
        self.table.read().await.exists(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn id(s: &str) -> DocumentId {
        DocumentId::from(s)
    }

    #[tokio::test]
    async fn test_seeded_store_returns_seed_content() {
        let store = InMemoryDocumentStore::seeded();
        for document in DocumentSeed::builtin().into_documents() {
            assert_eq!(store.get(&document.id).await.unwrap(), document.content);
        }
        assert_eq!(
            store.get(&id("financials.docx")).await.unwrap(),
            "These financials outline the project's budget and expenditures."
        );
    }

    #[tokio::test]
    async fn test_list_ids_in_seed_order_and_stable() {
        let store = InMemoryDocumentStore::seeded();
        let expected: Vec<DocumentId> = [
            "deposition.md",
            "report.pdf",
            "financials.docx",
            "outlook.pdf",
            "plan.md",
            "spec.txt",
        ]
        .into_iter()
        .map(DocumentId::from)
        .collect();

        assert_eq!(store.list_ids().await, expected);
        assert_eq!(store.list_ids().await, expected);
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test]
    async fn test_get_missing_document_fails() {
        let store = InMemoryDocumentStore::seeded();
        let error = store.get(&id("missing.pdf")).await.unwrap_err();
        assert!(matches!(
            error,
            DocumentMcpError::DocumentNotFound(ref d) if d.as_str() == "missing.pdf"
        ));
        assert!(!store.exists(&id("missing.pdf")).await);
    }

    #[tokio::test]
    async fn test_exists_agrees_with_get_and_replace() {
        let store = InMemoryDocumentStore::seeded();
        for doc_id in store.list_ids().await {
            assert!(store.exists(&doc_id).await);
            assert!(store.get(&doc_id).await.is_ok());
        }

        let missing = id("missing.pdf");
        assert!(!store.exists(&missing).await);
        assert!(store.get(&missing).await.unwrap_err().is_not_found());
        assert!(store.replace(&missing, "a", "b").await.unwrap_err().is_not_found());
        assert!(!store.exists(&missing).await);
    }

    #[tokio::test]
    async fn test_replace_is_visible_to_later_reads() {
        let store = InMemoryDocumentStore::seeded();
        let updated = store
            .replace(&id("plan.md"), "steps", "phases")
            .await
            .unwrap();

        let expected = "The plan outlines the phases for the project's implementation.";
        assert_eq!(updated, expected);
        assert_eq!(store.get(&id("plan.md")).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_replace_without_match_succeeds_unchanged() {
        let store = InMemoryDocumentStore::seeded();
        let before = store.get(&id("report.pdf")).await.unwrap();
        let after = store
            .replace(&id("report.pdf"), "does not occur", "x")
            .await
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(store.get(&id("report.pdf")).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_replace_missing_document_fails_without_mutation() {
        let store = InMemoryDocumentStore::seeded();
        let error = store
            .replace(&id("missing.pdf"), "a", "b")
            .await
            .unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test]
    async fn test_from_seed_rejects_duplicates() {
        let seed = DocumentSeed::new(vec![
            Document::new("a.md", "first"),
            Document::new("a.md", "second"),
        ]);
        let error = InMemoryDocumentStore::from_seed(seed).unwrap_err();
        assert!(
            matches!(error, DocumentMcpError::DuplicateDocument(ref d) if d.as_str() == "a.md")
        );
    }

    #[tokio::test]
    async fn test_concurrent_edits_are_serialized() {
        let store = Arc::new(
            InMemoryDocumentStore::from_seed(DocumentSeed::new(vec![Document::new(
                "counter.txt",
                "x",
            )]))
            .unwrap(),
        );

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.replace(&id("counter.txt"), "x", "xx").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let content = store.get(&id("counter.txt")).await.unwrap();
        assert_eq!(content.len(), 1 << 16);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryDocumentStore::new();
        assert!(store.is_empty().await);
        assert!(store.list_ids().await.is_empty());
    }
}
