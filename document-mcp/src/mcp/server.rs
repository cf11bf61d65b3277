//! MCP server implementation for the document collection

use super::error_handling::McpErrorHandler;
use super::resources;
use super::tool_handlers::ToolHandlers;
use super::tool_registry::{register_document_tools, ToolContext, ToolRegistry};
use super::types::DocumentPromptRequest;
use crate::config::{DocumentMcpConfig, DEFAULT_SERVER_NAME};
use crate::documents::{DocumentId, DocumentStore};
use crate::prompts::{DocumentPrompt, DOC_ID_ARGUMENT};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Serves an in-memory document collection. Use read_doc_contents and edit_document to read and change documents, the docs://documents resources to list and fetch them, and the format_markdown and summarize prompts to rework them.";

/// MCP server exposing the document store as tools, resources and prompts
#[derive(Clone)]
pub struct McpServer {
    store: Arc<dyn DocumentStore>,
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
    server_name: String,
}

impl McpServer {
    /// Create a new MCP server over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_name(store, DEFAULT_SERVER_NAME)
    }

    /// Create a new MCP server using the name from the configuration
    pub fn from_config(store: Arc<dyn DocumentStore>, config: &DocumentMcpConfig) -> Self {
        Self::with_name(store, &config.server_name)
    }

    fn with_name(store: Arc<dyn DocumentStore>, server_name: &str) -> Self {
        let tool_handlers = Arc::new(ToolHandlers::new(store.clone()));
        let tool_context = Arc::new(ToolContext::new(tool_handlers));

        let mut tool_registry = ToolRegistry::new();
        register_document_tools(&mut tool_registry);

        Self {
            store,
            tool_registry: Arc::new(tool_registry),
            tool_context,
            server_name: server_name.to_string(),
        }
    }

    /// The store this server reads and edits
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Tools offered by `tools/list`
    pub fn tool_list(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Run a tool by name
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => tool.execute(arguments, &self.tool_context).await,
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    /// Prompts offered by `prompts/list`
    pub fn prompt_list(&self) -> Vec<Prompt> {
        DocumentPrompt::ALL
            .iter()
            .map(|prompt| Prompt {
                name: prompt.name().to_string(),
                description: Some(prompt.description().to_string()),
                arguments: Some(vec![PromptArgument {
                    name: DOC_ID_ARGUMENT.to_string(),
                    description: Some(prompt.argument_description().to_string()),
                    required: Some(true),
                }]),
            })
            .collect()
    }

    /// Render a prompt for the document named in `arguments`
    pub async fn render_prompt(
        &self,
        name: &str,
        arguments: Option<&serde_json::Map<String, serde_json::Value>>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        let prompt = DocumentPrompt::from_name(name).ok_or_else(|| {
            tracing::warn!("Prompt '{}' not found", name);
            McpError::invalid_params(format!("Prompt '{name}' is not available."), None)
        })?;

        let request: DocumentPromptRequest = match arguments {
            Some(arguments) => {
                serde_json::from_value(serde_json::Value::Object(arguments.clone()))
                    .map_err(McpErrorHandler::invalid_arguments)?
            }
            None => {
                return Err(McpErrorHandler::invalid_arguments(format!(
                    "missing required argument '{DOC_ID_ARGUMENT}'"
                )))
            }
        };
        let doc_id = DocumentId::from(request.doc_id);

        let text = prompt
            .generate(self.store.as_ref(), &doc_id)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, "get prompt"))?;

        Ok(GetPromptResult {
            description: Some(prompt.description().to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text { text },
            }],
        })
    }

    /// Fixed resources offered by `resources/list`
    pub fn resource_list(&self) -> Vec<Resource> {
        resources::list_resources()
    }

    /// Resource templates offered by `resources/templates/list`
    pub fn resource_template_list(&self) -> Vec<ResourceTemplate> {
        resources::list_resource_templates()
    }

    /// Read a resource by URI
    pub async fn fetch_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        resources::read_resource(self.store.as_ref(), uri).await
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: Some(PromptsCapability {
                list_changed: Some(false),
            }),
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: Some(ResourcesCapability {
                subscribe: Some(false),
                list_changed: Some(false),
            }),
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_list(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.invoke_tool(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self.prompt_list(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        self.render_prompt(&request.name, request.arguments.as_ref())
            .await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resource_list(),
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_template_list(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        self.fetch_resource(&request.uri).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: self.server_name.clone(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
