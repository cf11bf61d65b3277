//! Prompt templates that embed a document for a downstream model
//!
//! Each prompt takes a `doc_id`, looks the document up and renders a Liquid
//! template with the identifier and the current content inserted verbatim.
//! Nothing is parsed or reformatted here; the consuming model does the work.

use crate::documents::{DocumentId, DocumentStore};
use crate::error::{DocumentMcpError, Result};
use liquid::Object;

/// Name of the single argument every document prompt accepts
pub const DOC_ID_ARGUMENT: &str = "doc_id";

/// The prompts offered for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPrompt {
    /// Ask the model to rewrite the document as markdown, then save it with `edit_document`
    FormatMarkdown,
    /// Ask the model for a concise summary
    Summarize,
}

impl DocumentPrompt {
    /// Every prompt, in listing order
    pub const ALL: [DocumentPrompt; 2] =
        [DocumentPrompt::FormatMarkdown, DocumentPrompt::Summarize];

    /// Look a prompt up by its MCP name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prompt| prompt.name() == name)
    }

    /// MCP name of the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::FormatMarkdown => "format_markdown",
            Self::Summarize => "summarize",
        }
    }

    /// Human readable description shown to clients
    pub fn description(&self) -> &'static str {
        match self {
            Self::FormatMarkdown => "Rewrites the contents of the document in Markdown format.",
            Self::Summarize => "Create a concise summary of the document content.",
        }
    }

    /// Description of the `doc_id` argument
    pub fn argument_description(&self) -> &'static str {
        match self {
            Self::FormatMarkdown => "Id of the document to format",
            Self::Summarize => "Id of the document to summarize",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::FormatMarkdown => include_str!("prompts/format_markdown.liquid"),
            Self::Summarize => include_str!("prompts/summarize.liquid"),
        }
    }

    /// Render the prompt for a document whose content is already known
    pub fn render(&self, doc_id: &DocumentId, content: &str) -> Result<String> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| DocumentMcpError::Template(e.to_string()))?;
        let template = parser
            .parse(self.template())
            .map_err(|e| DocumentMcpError::Template(e.to_string()))?;

        let mut globals = Object::new();
        globals.insert(
            DOC_ID_ARGUMENT.into(),
            liquid::model::Value::scalar(doc_id.to_string()),
        );
        globals.insert(
            "content".into(),
            liquid::model::Value::scalar(content.to_string()),
        );

        template
            .render(&globals)
            .map_err(|e| DocumentMcpError::Template(e.to_string()))
    }

    /// Look the document up and render the prompt for it.
    ///
    /// Fails with `DocumentNotFound` when the identifier is unknown. The store
    /// is only read.
    pub async fn generate(&self, store: &dyn DocumentStore, doc_id: &DocumentId) -> Result<String> {
        tracing::debug!("Generating {} prompt for {}", self.name(), doc_id);
        let content = store.get(doc_id).await?;
        self.render(doc_id, &content)
    }
}
