use clap::{Parser, Subcommand, ValueEnum};
use document_mcp::DocumentPrompt;
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;

/// Prompt names accepted by `document-mcp prompt`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptName {
    /// Rewrite a document in markdown
    #[value(name = "format_markdown")]
    FormatMarkdown,
    /// Summarize a document
    #[value(name = "summarize")]
    Summarize,
}

impl From<PromptName> for DocumentPrompt {
    fn from(name: PromptName) -> Self {
        match name {
            PromptName::FormatMarkdown => DocumentPrompt::FormatMarkdown,
            PromptName::Summarize => DocumentPrompt::Summarize,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "document-mcp")]
#[command(version)]
#[command(about = "An MCP server for an in-memory document collection")]
#[command(long_about = "
document-mcp is an MCP (Model Context Protocol) server that keeps a small
collection of documents in memory. Clients can read and edit documents with
tools, browse them as resources, and render formatting and summary prompts.

Example usage:
  document-mcp serve                     # Run as MCP server
  document-mcp list                      # Print document identifiers
  document-mcp read plan.md              # Print one document
  document-mcp prompt summarize plan.md  # Print a rendered prompt
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a document-mcp.yaml configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs document-mcp as an MCP server over stdio. This is the default mode when
no command is given and stdin is not a terminal. The server exposes:

- read_doc_contents and edit_document tools
- docs://documents and docs://documents/{doc_id} resources
- format_markdown and summarize prompts

Example:
  document-mcp serve
")]
    Serve,
    /// List document identifiers
    List,
    /// Print the contents of a document
    Read {
        /// Identifier of the document to print
        doc_id: String,
    },
    /// Render a prompt for a document
    Prompt {
        /// Prompt to render
        #[arg(value_enum)]
        name: PromptName,
        /// Identifier of the document to embed
        doc_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Whether stdin is attached to a terminal
    pub fn stdin_is_tty() -> bool {
        io::stdin().is_terminal()
    }
}
