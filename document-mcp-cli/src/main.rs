use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::CommandFactory;
use document_mcp::{DocumentMcpConfig, DocumentStore, InMemoryDocumentStore};
use document_mcp_cli::cli::{Cli, Commands};
use document_mcp_cli::commands;
use document_mcp_cli::error::{handle_cli_result, CliError, IntoCliResult};
use document_mcp_cli::exit_codes::{EXIT_FAILURE, EXIT_SUCCESS};
use document_mcp_cli::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let command = match cli.command {
        Some(command) => command,
        None if !Cli::stdin_is_tty() => Commands::Serve,
        None => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Failed to print help: {e}");
                process::exit(EXIT_FAILURE);
            }
            process::exit(EXIT_SUCCESS);
        }
    };

    let loaded = DocumentMcpConfig::load_with_fallback(cli.config.as_deref());
    let (config, skipped_config) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => process::exit(handle_cli_result::<()>(Err(CliError::config(e)))),
    };
    let configured_level = match config.tracing_level().cli_config_error() {
        Ok(level) => level,
        Err(e) => process::exit(handle_cli_result::<()>(Err(e))),
    };

    let is_mcp_mode = matches!(command, Commands::Serve) && !Cli::stdin_is_tty();
    let log_level = logging::select_level(cli.quiet, cli.debug, cli.verbose, configured_level);
    logging::init_tracing(log_level, is_mcp_mode);
    if let Some(e) = skipped_config {
        tracing::warn!("Ignoring configuration file, using environment and defaults: {}", e);
    }

    let store = match commands::build_store(&config) {
        Ok(store) => Arc::new(store),
        Err(e) => process::exit(handle_cli_result::<()>(Err(e))),
    };

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server(store, &config).await
        }
        Commands::List => {
            tracing::info!("Listing documents");
            handle_cli_result(commands::run_list(store.as_ref(), &mut std::io::stdout()).await)
        }
        Commands::Read { doc_id } => {
            tracing::info!("Reading document {}", doc_id);
            handle_cli_result(
                commands::run_read(store.as_ref(), &doc_id, &mut std::io::stdout()).await,
            )
        }
        Commands::Prompt { name, doc_id } => {
            tracing::info!("Rendering {:?} prompt for {}", name, doc_id);
            handle_cli_result(
                commands::run_prompt(store.as_ref(), name, &doc_id, &mut std::io::stdout()).await,
            )
        }
    };

    process::exit(exit_code);
}

async fn run_server(store: Arc<InMemoryDocumentStore>, config: &DocumentMcpConfig) -> i32 {
    match serve(store, config).await {
        Ok(()) => {
            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

async fn serve(
    store: Arc<InMemoryDocumentStore>,
    config: &DocumentMcpConfig,
) -> anyhow::Result<()> {
    use document_mcp::mcp::McpServer;
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let store: Arc<dyn DocumentStore> = store;
    let server = McpServer::from_config(store, config);

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                ct_clone.cancel();
            }
            Err(e) => tracing::warn!("Failed to listen for ctrl+c: {}", e),
        }
    });

    let running = serve_server(server, stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start MCP server: {e}"))?;
    tracing::info!("MCP server started successfully");

    tokio::select! {
        result = running.waiting() => {
            let reason = result.context("MCP service task failed")?;
            tracing::info!("MCP session ended: {:?}", reason);
        }
        _ = ct.cancelled() => {
            tracing::info!("Stopping MCP server");
        }
    }

    Ok(())
}
