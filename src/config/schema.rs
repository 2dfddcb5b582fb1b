use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "server": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "prompt_template": { "type": "string" },
                    "api_tokens": { "type": "array", "items": { "type": "string", "minLength": 1 } }
                }
            },
            "llm": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "provider": { "type": "string", "enum": ["gemini", "openai", "local"] },
                    "model": { "type": "string" },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string", "format": "uri" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            },
            "viewer": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "service_url": { "type": "string", "format": "uri" },
                    "api_token": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            }
        }
    })
});
