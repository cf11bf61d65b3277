//! Documents and the store that owns them
//!
//! A document is an opaque identifier paired with mutable text. The store keeps
//! documents in seed order and is the only place content changes.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

pub mod memory;
pub mod seed;

pub use memory::InMemoryDocumentStore;
pub use seed::DocumentSeed;

/// Opaque identifier of a document, e.g. `plan.md`
///
/// No format is enforced: anything the caller sends is looked up as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create an identifier from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single document as it appears in a seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within the store
    pub id: DocumentId,
    /// Current text content
    pub content: String,
}

impl Document {
    /// Create a document from an identifier and its content
    pub fn new(id: impl Into<DocumentId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Storage interface for the document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Current content of a document
    async fn get(&self, id: &DocumentId) -> Result<String>;

    /// All identifiers, in seed order
    async fn list_ids(&self) -> Vec<DocumentId>;

    /// Replace every occurrence of `old` with `new` and return the new content
    async fn replace(&self, id: &DocumentId, old: &str, new: &str) -> Result<String>;

    /// Whether a document with this identifier exists
    async fn exists(&self, id: &DocumentId) -> bool;
}

/// Replace all non-overlapping occurrences of `old` in `content`, scanning left to right.
///
/// An empty `old` matches nothing and returns the content unchanged.
pub fn replace_all(content: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return content.to_string();
    }
    content.replace(old, new)
}
