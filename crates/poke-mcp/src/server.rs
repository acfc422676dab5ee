//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with
//! the Pokedex lookup tools.

use std::io::{BufRead, Write};

use serde_json::{Value, json};

use poke_core::PokeClient;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for Pokedex lookups
///
/// Reads JSON-RPC 2.0 messages line by line from stdin and writes one
/// response line per request to stdout. Tool-level failures are
/// reported inside successful responses; only stdio failures terminate
/// the loop.
pub struct PokeMcpServer {
    /// Upstream API client shared by all tool calls
    client: PokeClient,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,
}

impl PokeMcpServer {
    /// Create a new MCP server instance backed by the given client
    pub fn new(client: PokeClient) -> Self {
        Self {
            client,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Initialize the server
    ///
    /// Loads the tool definitions and prepares the server to handle
    /// requests.
    pub fn initialize(&mut self) {
        tracing::info!("Initializing MCP server");

        self.tools = get_tool_definitions();
        self.initialized = true;
    }

    /// Run the MCP server
    ///
    /// Starts processing MCP protocol messages over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize();

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate
    /// handler. Returns the response as a string, or an empty string
    /// for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params)?,
            "initialized" => return Ok(String::new()), // Notification, no response
            "notifications/initialized" => return Ok(String::new()), // Notification, no response
            "tools/list" => self.handle_tools_list(request.id)?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    ///
    /// Returns server capabilities and info. Client info is logged when
    /// present; clients sending empty params are accepted as well.
    fn handle_initialize(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        if let Ok(params) = serde_json::from_value::<InitializeParams>(params) {
            tracing::info!(
                client = %params.client_info.name,
                version = %params.client_info.version,
                protocol = %params.protocol_version,
                "Client connected"
            );
        }

        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "poke-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    ///
    /// Returns the list of available tools.
    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools_value: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        Ok(JsonRpcResponse::success(id, json!({ "tools": tools_value })))
    }

    /// Handle tools/call request
    ///
    /// Executes the requested tool and returns the result. Handler
    /// failures become error tool results inside a successful response.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        let tool_result =
            match handle_tool_call(&self.client, &tool_params.name, tool_params.arguments).await {
                Ok(text) => ToolResult::text(text),
                Err(e) => ToolResult::error(e.to_string()),
            };

        Ok(JsonRpcResponse::success(
            id,
            serde_json::to_value(tool_result)?,
        ))
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
