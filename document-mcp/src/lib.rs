//! # Document MCP
//!
//! A small in-memory document collection served over the Model Context Protocol.
//!
//! ## Features
//!
//! - **Document Store**: Ordered identifier to content mapping seeded at startup
//! - **Tools**: `read_doc_contents` and `edit_document`
//! - **Resources**: `docs://documents` and `docs://documents/{doc_id}`
//! - **Prompts**: `format_markdown` and `summarize`, rendered with Liquid
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use document_mcp::{DocumentId, DocumentStore, InMemoryDocumentStore};
//!
//! # async fn example() -> document_mcp::Result<()> {
//! let store = InMemoryDocumentStore::seeded();
//! let id = DocumentId::from("plan.md");
//!
//! store.replace(&id, "steps", "phases").await?;
//! println!("{}", store.get(&id).await?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Layered configuration (defaults, environment, YAML)
pub mod config;

/// Document identifiers, the store trait and its in-memory implementation
pub mod documents;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Prompt templates that embed a document for a downstream model
pub mod prompts;

pub use config::{ConfigError, DocumentMcpConfig};
pub use documents::{Document, DocumentId, DocumentSeed, DocumentStore, InMemoryDocumentStore};
pub use error::{DocumentMcpError, Result};
pub use prompts::DocumentPrompt;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Document, DocumentId, DocumentMcpConfig, DocumentMcpError, DocumentPrompt, DocumentSeed,
        DocumentStore, InMemoryDocumentStore, Result,
    };

    pub use crate::mcp::McpServer;
}

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_utils;
