//! Utility functions for MCP operations

use serde_json::Value;

/// Generate a JSON schema for a request type
pub fn generate_tool_schema<T>() -> Value
where
    T: schemars::JsonSchema,
{
    serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}
