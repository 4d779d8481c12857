//! Structured-output schema attached to every Gemini request.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Array of `{ sender, subject, summary[] }` objects, all fields required.
///
/// Uses the OpenAPI subset Gemini accepts for `responseSchema`.
pub static OUTPUT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sender": {
                    "type": "STRING",
                    "description": "The sender's name or email."
                },
                "subject": {
                    "type": "STRING",
                    "description": "The email's subject line."
                },
                "summary": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "3-4 bullet points for the key action/request/deadline."
                }
            },
            "required": ["sender", "subject", "summary"],
            "propertyOrdering": ["sender", "subject", "summary"]
        }
    })
});

/// Mime type requested for the model answer.
pub const RESPONSE_MIME_TYPE: &str = "application/json";
