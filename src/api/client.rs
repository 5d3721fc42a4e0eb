//! # HTTP Backend
//!
//! The only module that talks to the network. `ChatBackend` is the seam:
//! the TUI holds an `Arc<dyn ChatBackend>` and tests substitute fakes or a
//! wiremock server.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ChatRequest, ChatResponse, GameAction, ResetRequest};

/// Fixed user-facing reply shown when a chat round-trip fails for any
/// reason. The reference displays this instead of surfacing the error.
pub const FALLBACK_REPLY: &str = "Connection error, please try again...";

/// Errors from the remote service.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned a non-2xx status.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the client needs from the remote NPC service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the backend name for logging.
    fn name(&self) -> &str;

    /// Sends one player message and returns the NPC reply plus any
    /// game actions. One request, no retry.
    async fn send(&self, message: &str, thread_id: &str) -> Result<ChatResponse, ApiError>;

    /// Asks the service to clear server-side session state for the thread.
    async fn reset(&self, thread_id: &str) -> Result<(), ApiError>;
}

/// Backend speaking the demo server's JSON protocol over HTTP.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &str, thread_id: &str) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
            thread_id: thread_id.to_string(),
        };

        info!("chat request: thread={}, {} bytes", thread_id, message.len());

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("chat response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("chat API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!(
            "chat reply: {} bytes, {} actions",
            chat_response.message.len(),
            chat_response.actions.len()
        );

        Ok(chat_response)
    }

    async fn reset(&self, thread_id: &str) -> Result<(), ApiError> {
        let request = ResetRequest {
            thread_id: thread_id.to_string(),
        };

        info!("reset request: thread={}", thread_id);

        let response = self
            .client
            .post(format!("{}/reset", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("reset API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        Ok(())
    }
}

/// Reply text and actions after error folding. What the UI consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub reply: String,
    pub actions: Vec<GameAction>,
}

/// One chat round-trip with the reference's failure contract: any transport
/// or protocol error collapses into the fixed fallback reply and an empty
/// action list. This never fails.
pub async fn send_chat(backend: &dyn ChatBackend, message: &str, thread_id: &str) -> ChatOutcome {
    match backend.send(message, thread_id).await {
        Ok(response) => ChatOutcome {
            reply: response.message,
            actions: response.actions,
        },
        Err(e) => {
            warn!("chat request failed ({}): {}", backend.name(), e);
            ChatOutcome {
                reply: FALLBACK_REPLY.to_string(),
                actions: Vec::new(),
            }
        }
    }
}
