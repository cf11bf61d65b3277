//! One-shot commands that work on the seeded collection without a client

use crate::cli::PromptName;
use crate::error::{CliResult, IntoCliResult};
use document_mcp::{
    DocumentId, DocumentMcpConfig, DocumentPrompt, DocumentSeed, DocumentStore,
    InMemoryDocumentStore,
};
use std::io::Write;

/// Build the store from the built-in documents or the configured seed file.
///
/// A seed file that cannot be read, parsed or that repeats an identifier is a
/// configuration error.
pub fn build_store(config: &DocumentMcpConfig) -> CliResult<InMemoryDocumentStore> {
    let seed = DocumentSeed::from_config(config).cli_config_error()?;
    tracing::debug!("Seeding {} documents", seed.documents().len());
    InMemoryDocumentStore::from_seed(seed).cli_config_error()
}

/// Print every document identifier, one per line
pub async fn run_list(store: &dyn DocumentStore, out: &mut impl Write) -> CliResult<()> {
    for doc_id in store.list_ids().await {
        writeln!(out, "{doc_id}").cli_general_error()?;
    }
    Ok(())
}

/// Print one document's content
pub async fn run_read(
    store: &dyn DocumentStore,
    doc_id: &str,
    out: &mut impl Write,
) -> CliResult<()> {
    let content = store.get(&DocumentId::from(doc_id)).await.cli_general_error()?;
    writeln!(out, "{content}").cli_general_error()
}

/// Print a rendered prompt for one document
pub async fn run_prompt(
    store: &dyn DocumentStore,
    name: PromptName,
    doc_id: &str,
    out: &mut impl Write,
) -> CliResult<()> {
    let prompt = DocumentPrompt::from(name);
    let text = prompt
        .generate(store, &DocumentId::from(doc_id))
        .await
        .cli_general_error()?;
    writeln!(out, "{text}").cli_general_error()
}
