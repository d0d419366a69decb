use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "detection": {
                "type": "object",
                "properties": {
                    "language": { "type": "string", "minLength": 1 },
                    "threshold": { "type": "number", "minimum": 0, "maximum": 1 },
                    "threshold_policy": { "type": "string", "enum": ["strict", "inclusive"] },
                    "punctuation": { "type": "string", "enum": ["keep", "discard"] },
                    "stopwords_file": { "type": ["string", "null"] },
                    "extra_stopwords": { "type": "array", "items": { "type": "string" } },
                    "diagnostics": { "type": "boolean" }
                },
                "additionalProperties": false
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "request_timeout_secs": { "type": "integer", "minimum": 1 },
                    "max_body_bytes": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
