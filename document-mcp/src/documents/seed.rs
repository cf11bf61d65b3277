//! Initial document sets
//!
//! The built-in seed holds six sample documents. A YAML seed file can replace it:
//!
//! ```yaml
//! - id: plan.md
//!   content: The plan outlines the steps for the project's implementation.
//! - id: notes.txt
//!   content: Anything at all.
//! ```

use super::Document;
use crate::config::DocumentMcpConfig;
use crate::error::Result;
use std::path::Path;

const BUILTIN_DOCUMENTS: [(&str, &str); 6] = [
    (
        "deposition.md",
        "This deposition covers the testimony of Angela Smith, P.E.",
    ),
    (
        "report.pdf",
        "The report details the state of a 20m condenser tower.",
    ),
    (
        "financials.docx",
        "These financials outline the project's budget and expenditures.",
    ),
    (
        "outlook.pdf",
        "This document presents the projected future performance of the system.",
    ),
    (
        "plan.md",
        "The plan outlines the steps for the project's implementation.",
    ),
    (
        "spec.txt",
        "These specifications define the technical requirements for the equipment.",
    ),
];

/// Ordered list of documents used to populate a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSeed {
    documents: Vec<Document>,
}

impl DocumentSeed {
    /// Create a seed from documents in the order they should be listed
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// The six sample documents served when nothing else is configured
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_DOCUMENTS
                .iter()
                .map(|(id, content)| Document::new(*id, *content))
                .collect(),
        )
    }

    /// Parse a seed from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let documents: Vec<Document> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(documents))
    }

    /// Load a seed from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading document seed from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// The seed named by the configuration, or the built-in one
    pub fn from_config(config: &DocumentMcpConfig) -> Result<Self> {
        match &config.seed_file {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Documents in listing order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Consume the seed, yielding its documents in order
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl Default for DocumentSeed {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentMcpError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_seed_has_six_documents_in_order() {
        let seed = DocumentSeed::builtin();
        let ids: Vec<&str> = seed.documents().iter().map(|d| d.id.as_str()).collect();
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

    #[test]
    fn test_from_yaml_str_keeps_file_order() {
        let seed = DocumentSeed::from_yaml_str(
            "- id: b.txt\n  content: second letter\n- id: a.txt\n  content: first letter\n",
        )
        .unwrap();
        assert_eq!(
            seed.into_documents(),
            vec![
                Document::new("b.txt", "second letter"),
                Document::new("a.txt", "first letter"),
            ]
        );
    }

    #[test]
    fn test_from_yaml_str_rejects_malformed_input() {
        let error = DocumentSeed::from_yaml_str("- id: only-an-id\n").unwrap_err();
        assert!(matches!(error, DocumentMcpError::Serialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- id: notes.md\n  content: hello").unwrap();

        let seed = DocumentSeed::load(file.path()).unwrap();
        assert_eq!(seed.documents(), &[Document::new("notes.md", "hello")]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let error = DocumentSeed::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(error, DocumentMcpError::Io(_)));
    }

    #[test]
    fn test_from_config_defaults_to_builtin() {
        let config = DocumentMcpConfig::default();
        assert_eq!(
            DocumentSeed::from_config(&config).unwrap(),
            DocumentSeed::builtin()
        );
    }
}
