//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ChatBackend, ChatResponse};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// A no-op backend for tests that don't need real network calls.
pub struct NoopBackend;

#[async_trait]
impl ChatBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, _message: &str, _thread_id: &str) -> Result<ChatResponse, ApiError> {
        Ok(ChatResponse {
            message: String::new(),
            actions: Vec::new(),
        })
    }

    async fn reset(&self, _thread_id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        base_url: "http://localhost:0/api".to_string(),
        thread_id: "test-thread".to_string(),
        npc_name: "Tester".to_string(),
        slot_count: 8,
    }
}

/// Creates a test App with a NoopBackend.
pub fn test_app() -> App {
    App::from_config(Arc::new(NoopBackend), &test_config()).unwrap()
}
