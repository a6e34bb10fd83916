use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "store": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 },
                    "atomic_writes": { "type": "boolean" }
                }
            },
            "audit": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 },
                    "actor": { "type": "string" }
                }
            },
            "reporting": {
                "type": "object",
                "properties": {
                    "pacing_ms": { "type": "integer", "minimum": 0, "maximum": 60000 }
                }
            },
            "data": {
                "type": "object",
                "properties": {
                    "directory": { "type": "string" }
                }
            }
        }
    })
});
