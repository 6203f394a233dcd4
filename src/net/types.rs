#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {api_url}/chat`.
///
/// `widget_key` is omitted from the JSON entirely when the deployment has no
/// key configured.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_key: Option<String>,
}

/// Successful response body from the chat endpoint.
///
/// Only `message` is required; `session_id` and `timestamp` mirror what the
/// backend sends but the widget tolerates their absence. A body without a
/// string `message` fails deserialization and is treated as a send failure.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
