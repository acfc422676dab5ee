//! MCP Tool definitions
//!
//! The two tools exposed by the server, with their JSON-Schema input
//! schemas, plus the tool-result wire types.
//!
//! - `get_pokemon` - fetch one Pokemon and render its attributes
//! - `compare_pokemon` - fetch two Pokemon and compare their base stats

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_pokemon".to_string(),
            description: "Get information about a Pokemon".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the Pokemon (lowercase)"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "compare_pokemon".to_string(),
            description: "Compare two Pokemon".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "pokemon1": {
                        "type": "string",
                        "description": "First Pokemon to compare (lowercase)"
                    },
                    "pokemon2": {
                        "type": "string",
                        "description": "Second Pokemon to compare (lowercase)"
                    }
                },
                "required": ["pokemon1", "pokemon2"]
            }),
        },
    ]
}
