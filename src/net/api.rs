//! HTTP call against the widget chat endpoint.
//!
//! Browser builds (`csr`): one real POST via `gloo-net`. Host builds: a stub
//! error, since the endpoint is only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and malformed bodies all collapse
//! into [`SendError`]; callers treat every variant the same way (one fallback
//! message, no retry), so the variants exist for logging, not for policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, ChatResponse};

/// Why a chat send failed.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Send one chat message to `{api_url}/chat` and return the assistant reply.
///
/// # Errors
///
/// Returns a [`SendError`] on network failure, a non-success status, or a
/// response body without a usable `message`.
pub async fn send_chat(api_url: &str, request: &ChatRequest) -> Result<String, SendError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{api_url}/chat");
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(SendError::Status(resp.status()));
        }

        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|e| SendError::InvalidResponse(e.to_string()))?;
        reply_from(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_url, request);
        Err(SendError::Network("not available off the browser".to_owned()))
    }
}

/// Extract the assistant reply from a parsed response, rejecting blank
/// messages the same way a missing field is rejected.
pub fn reply_from(response: ChatResponse) -> Result<String, SendError> {
    if response.message.trim().is_empty() {
        return Err(SendError::InvalidResponse("empty message".to_owned()));
    }
    Ok(response.message)
}
